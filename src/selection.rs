//! Selection state behind a "choose target languages" interaction.
//!
//! `SelectionStateManager` owns the sorted candidate list, the set of
//! selected codes and the two persisted flags. A UI layer drives it with
//! explicit calls (`toggle`, `set_select_all`, ...) and asks it to
//! `confirm` when the user accepts.

use crate::i18n::{Language, LanguageProvider};
use crate::preferences::{Preferences, SelectedLanguageStore, SettingsStore};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Codes of the currently selected languages.
pub type SelectionSet = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The code is not one of the candidates. Indicates an integration bug.
    #[error("Unknown language code: '{0}'")]
    InvalidCode(String),

    /// Nothing is selected. Shown to the user; the interaction stays open.
    #[error("Please select the language you need to translate!")]
    EmptySelection,
}

/// In-memory selection state for one interaction.
///
/// Discard it to cancel; nothing but flag changes reaches the store
/// until `confirm`.
pub struct SelectionStateManager {
    /// Sorted by code, unique codes
    candidates: Vec<Language>,
    /// Always a subset of candidate codes
    selected: SelectionSet,
    preferences: Preferences,
    store: Option<Box<dyn SettingsStore>>,
    scope: String,
}

impl SelectionStateManager {
    /// Build a manager without a backing store.
    ///
    /// Candidates are sorted by code (stable, byte-wise) and deduplicated
    /// by code, first occurrence wins. The initial selection is
    /// `saved ∩ candidate codes`.
    pub fn new(candidates: Vec<Language>, saved: &SelectionSet, preferences: Preferences) -> Self {
        let mut candidates = candidates;
        candidates.sort_by(|a, b| a.code().cmp(b.code()));
        candidates.dedup_by(|later, earlier| later.code() == earlier.code());

        let selected: SelectionSet = candidates
            .iter()
            .map(Language::code)
            .filter(|code| saved.contains(*code))
            .map(str::to_string)
            .collect();

        let dropped = saved.len() - selected.len();
        if dropped > 0 {
            debug!("Ignoring {} saved language code(s) not offered as candidates", dropped);
        }

        Self {
            candidates,
            selected,
            preferences,
            store: None,
            scope: String::new(),
        }
    }

    /// Build a manager from a provider and a store.
    ///
    /// Reads the saved codes for `scope` and both flags. Later flag changes
    /// are written back to `store`, and `confirm` saves the selection there.
    pub fn load<S>(provider: &dyn LanguageProvider, store: S, scope: impl Into<String>) -> Result<Self>
    where
        S: SettingsStore + 'static,
    {
        let scope = scope.into();
        let saved = store
            .selected_codes(&scope)
            .context(format!("Failed to load selected languages for '{}'", scope))?;
        let preferences = Preferences::load(&store).context("Failed to load preferences")?;

        let mut manager = Self::new(provider.supported_languages(), &saved, preferences);
        info!(
            "Loaded {} candidate languages, {} selected for '{}'",
            manager.candidates.len(),
            manager.selected.len(),
            scope
        );

        manager.store = Some(Box::new(store));
        manager.scope = scope;
        Ok(manager)
    }

    /// Flip the selection state of `code`.
    ///
    /// Returns whether the language is selected afterwards.
    pub fn toggle(&mut self, code: &str) -> Result<bool, SelectionError> {
        if !self.is_candidate(code) {
            warn!("Ignoring toggle of unknown language code '{}'", code);
            return Err(SelectionError::InvalidCode(code.to_string()));
        }

        if self.selected.remove(code) {
            Ok(false)
        } else {
            self.selected.insert(code.to_string());
            Ok(true)
        }
    }

    /// Select every candidate (`on`) or none, and remember the choice.
    ///
    /// This replaces the selection outright; earlier toggles are lost.
    pub fn set_select_all(&mut self, on: bool) {
        self.selected = if on {
            self.candidates
                .iter()
                .map(|lang| lang.code().to_string())
                .collect()
        } else {
            SelectionSet::new()
        };
        self.preferences.select_all = on;
        self.persist_preferences();
    }

    /// Set whether existing translations get overwritten.
    ///
    /// Leaves the selection untouched.
    pub fn set_overwrite_existing(&mut self, on: bool) {
        self.preferences.overwrite_existing = on;
        self.persist_preferences();
    }

    /// Selected languages in display order.
    pub fn current_selection(&self) -> Vec<Language> {
        self.candidates
            .iter()
            .filter(|lang| self.selected.contains(lang.code()))
            .cloned()
            .collect()
    }

    /// Gate for confirmation: fails when nothing is selected.
    pub fn validate_for_confirm(&self) -> Result<SelectionSet, SelectionError> {
        if self.selected.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        Ok(self.selected.clone())
    }

    /// Accept the current selection.
    ///
    /// The selection is saved for this scope first, even when it is empty.
    /// `on_confirm` runs only if validation passes. Store failures are
    /// logged and do not affect the result.
    pub fn confirm<F>(&self, on_confirm: F) -> Result<Vec<Language>, SelectionError>
    where
        F: FnOnce(&[Language]),
    {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_selected_codes(&self.scope, &self.selected) {
                warn!("Failed to save selected languages for '{}': {:#}", self.scope, e);
            }
        }

        self.validate_for_confirm()?;

        let selection = self.current_selection();
        info!("Confirmed {} target language(s)", selection.len());
        on_confirm(&selection);
        Ok(selection)
    }

    /// Candidates in display order (ascending code).
    pub fn candidates(&self) -> &[Language] {
        &self.candidates
    }

    /// Check whether `code` is currently selected.
    ///
    /// # Returns
    /// `false` for unselected and for unknown codes alike.
    pub fn is_selected(&self, code: &str) -> bool {
        self.selected.contains(code)
    }

    /// Selected codes, ascending.
    pub fn selection(&self) -> &SelectionSet {
        &self.selected
    }

    /// Current flag values, including unsaved changes on a storeless manager.
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Project scope the selection is saved under. Empty without a store.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Rows needed to lay the candidates out in `columns` columns.
    pub fn grid_rows(&self, columns: usize) -> usize {
        self.candidates.len().div_ceil(columns.max(1))
    }

    fn is_candidate(&self, code: &str) -> bool {
        self.candidates
            .binary_search_by(|lang| lang.code().cmp(code))
            .is_ok()
    }

    fn persist_preferences(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = self.preferences.save(store.as_ref()) {
                warn!("Failed to save preferences: {:#}", e);
            }
        }
    }
}

impl fmt::Debug for SelectionStateManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStateManager")
            .field("candidates", &self.candidates.len())
            .field("selected", &self.selected)
            .field("preferences", &self.preferences)
            .field("scope", &self.scope)
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

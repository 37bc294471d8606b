//! Persisted user preferences for the language selection.
//!
//! Two independent stores are involved: boolean flags keyed by constant
//! names, and the set of previously selected language codes keyed by
//! project scope. Most backends implement both, see [`SettingsStore`].

use anyhow::{anyhow, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

/// Key for "overwrite existing translated strings".
pub const KEY_OVERWRITE_EXISTING: &str = "overwrite-existing";

/// Key for "select all languages".
pub const KEY_SELECT_ALL: &str = "select-all";

/// Boolean preference storage.
pub trait PreferenceStore {
    /// Read a flag. A key that was never written reads as `false`.
    fn get_bool(&self, key: &str) -> Result<bool>;

    /// Write a flag, replacing any previous value.
    fn set_bool(&self, key: &str, value: bool) -> Result<()>;
}

/// Storage for previously selected language codes, per project scope.
pub trait SelectedLanguageStore {
    /// Read the codes saved for `scope`. An unknown scope reads as empty.
    fn selected_codes(&self, scope: &str) -> Result<BTreeSet<String>>;

    /// Replace the codes saved for `scope`. An empty set is stored as such.
    fn save_selected_codes(&self, scope: &str, codes: &BTreeSet<String>) -> Result<()>;
}

/// A backend that stores both flags and selected codes.
pub trait SettingsStore: PreferenceStore + SelectedLanguageStore {}

impl<T: PreferenceStore + SelectedLanguageStore> SettingsStore for T {}

/// The two persisted flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub overwrite_existing: bool,
    pub select_all: bool,
}

impl Preferences {
    /// Load both flags from `store`.
    ///
    /// # Returns
    /// * `Ok(Preferences)` with unset flags read as `false`
    /// * `Err` if the store cannot be read
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self {
            overwrite_existing: store.get_bool(KEY_OVERWRITE_EXISTING)?,
            select_all: store.get_bool(KEY_SELECT_ALL)?,
        })
    }

    /// Write both flags to `store`.
    ///
    /// The stored document always carries both keys afterwards, even the
    /// one that did not change.
    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &S) -> Result<()> {
        store.set_bool(KEY_OVERWRITE_EXISTING, self.overwrite_existing)?;
        store.set_bool(KEY_SELECT_ALL, self.select_all)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    flags: BTreeMap<String, bool>,
    selected: BTreeMap<String, BTreeSet<String>>,
}

/// In-process store. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryState) -> T) -> Result<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))?;
        Ok(f(&mut state))
    }
}

impl PreferenceStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Result<bool> {
        self.with_state(|state| state.flags.get(key).copied().unwrap_or(false))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.with_state(|state| {
            state.flags.insert(key.to_string(), value);
        })
    }
}

impl SelectedLanguageStore for MemoryStore {
    fn selected_codes(&self, scope: &str) -> Result<BTreeSet<String>> {
        self.with_state(|state| state.selected.get(scope).cloned().unwrap_or_default())
    }

    fn save_selected_codes(&self, scope: &str, codes: &BTreeSet<String>) -> Result<()> {
        self.with_state(|state| {
            state.selected.insert(scope.to_string(), codes.clone());
        })
    }
}

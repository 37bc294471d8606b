//! File-backed preference store.
//!
//! Flags and per-scope selections live in one pretty-printed JSON
//! document, so the file can be inspected or edited by hand.

use crate::preferences::{PreferenceStore, SelectedLanguageStore};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// On-disk layout of the preferences file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    flags: BTreeMap<String, bool>,
    #[serde(default)]
    selected_languages: BTreeMap<String, BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Preference store backed by a single JSON file.
///
/// Every read loads the file and every write rewrites it, so several
/// stores pointed at the same path observe each other's changes.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Open a store at `path`. The file is not touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last successful write.
    ///
    /// # Returns
    /// * `Ok(None)` if the file does not exist yet
    /// * `Err` if the file exists but cannot be read or parsed
    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.read_document()?.updated_at)
    }

    fn read_document(&self) -> Result<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }

        let raw = fs::read_to_string(&self.path)
            .context(format!("Failed to read preferences at {}", self.path.display()))?;

        if raw.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        serde_json::from_str(&raw)
            .context(format!("Failed to parse preferences at {}", self.path.display()))
    }

    fn write_document(&self, document: &StoreDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(document)
            .context("Failed to serialize preferences")?;
        fs::write(&self.path, json)
            .context(format!("Failed to write preferences at {}", self.path.display()))?;

        debug!("Wrote preferences to {}", self.path.display());
        Ok(())
    }

    /// Read-modify-write under the store lock.
    fn update(&self, f: impl FnOnce(&mut StoreDocument)) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("Preference file lock poisoned"))?;

        let mut document = self.read_document()?;
        f(&mut document);
        document.updated_at = Some(Utc::now());
        self.write_document(&document)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get_bool(&self, key: &str) -> Result<bool> {
        Ok(self
            .read_document()?
            .flags
            .get(key)
            .copied()
            .unwrap_or(false))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.update(|document| {
            document.flags.insert(key.to_string(), value);
        })
    }
}

impl SelectedLanguageStore for JsonFileStore {
    fn selected_codes(&self, scope: &str) -> Result<BTreeSet<String>> {
        Ok(self
            .read_document()?
            .selected_languages
            .remove(scope)
            .unwrap_or_default())
    }

    fn save_selected_codes(&self, scope: &str, codes: &BTreeSet<String>) -> Result<()> {
        self.update(|document| {
            document
                .selected_languages
                .insert(scope.to_string(), codes.clone());
        })
    }
}

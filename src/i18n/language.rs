//! Language type: a candidate translation target.
//!
//! Unlike registry entries, a `Language` owns its strings so that
//! candidate lists can come from any provider, not only the built-in table.

use crate::i18n::LanguageConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A translation target language.
///
/// The `code` is the unique key; two languages with the same code are
/// the same candidate as far as selection is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// Language code as understood by the translation provider (e.g., "en", "zh-CN")
    code: String,

    /// Human readable name (e.g., "English", "Chinese Simplified")
    display_name: String,
}

impl Language {
    /// Create a language from a code and display name.
    ///
    /// # Example
    /// ```ignore
    /// let french = Language::new("fr", "French");
    /// ```
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }

    /// Get the language code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Caption shown next to a checkbox, e.g. `French(fr)`.
    pub fn label(&self) -> String {
        format!("{}({})", self.display_name, self.code)
    }
}

impl From<&LanguageConfig> for Language {
    fn from(config: &LanguageConfig) -> Self {
        Language::new(config.code, config.name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

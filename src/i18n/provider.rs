//! Sources of candidate languages.

use crate::i18n::Language;
use std::collections::HashSet;

/// Supplies the full candidate list of translation target languages.
///
/// Implementations return languages deduplicated by code, in whatever
/// order the underlying provider uses.
pub trait LanguageProvider {
    fn supported_languages(&self) -> Vec<Language>;
}

/// A provider over a fixed, caller-supplied list.
#[derive(Debug, Clone, Default)]
pub struct StaticLanguageProvider {
    languages: Vec<Language>,
}

impl StaticLanguageProvider {
    /// Build a provider from `languages`, keeping the first occurrence of
    /// each code.
    pub fn new(languages: Vec<Language>) -> Self {
        let mut seen = HashSet::new();
        let languages = languages
            .into_iter()
            .filter(|lang| seen.insert(lang.code().to_string()))
            .collect();
        Self { languages }
    }
}

impl LanguageProvider for StaticLanguageProvider {
    fn supported_languages(&self) -> Vec<Language> {
        self.languages.clone()
    }
}

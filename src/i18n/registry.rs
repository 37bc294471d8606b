//! Language registry: the translation provider's supported target languages.
//!
//! The registry is a singleton initialized with `OnceLock` on first access
//! and immutable thereafter. Entries are kept in the provider's own order;
//! sorting for display is the selection manager's job.

use crate::i18n::{Language, LanguageProvider};
use std::sync::OnceLock;

/// Static metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Provider language code (e.g., "en", "zh-CN")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in registry order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Check if a language code is supported.
    pub fn contains(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Number of supported languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl LanguageProvider for LanguageRegistry {
    fn supported_languages(&self) -> Vec<Language> {
        self.languages.iter().map(Language::from).collect()
    }
}

macro_rules! languages {
    ($($code:literal => $name:literal),* $(,)?) => {
        vec![$(LanguageConfig { code: $code, name: $name }),*]
    };
}

/// Target languages supported by Google Translate.
///
/// The source language ("auto") is not a valid target and is not listed.
fn default_languages() -> Vec<LanguageConfig> {
    languages![
        "sq" => "Albanian",
        "ar" => "Arabic",
        "am" => "Amharic",
        "az" => "Azerbaijani",
        "ga" => "Irish",
        "et" => "Estonian",
        "eu" => "Basque",
        "be" => "Belarusian",
        "bg" => "Bulgarian",
        "is" => "Icelandic",
        "pl" => "Polish",
        "bs" => "Bosnian",
        "fa" => "Persian",
        "af" => "Afrikaans",
        "da" => "Danish",
        "de" => "German",
        "ru" => "Russian",
        "fr" => "French",
        "tl" => "Filipino",
        "fi" => "Finnish",
        "fy" => "Frisian",
        "km" => "Khmer",
        "ka" => "Georgian",
        "gu" => "Gujarati",
        "kk" => "Kazakh",
        "ht" => "Haitian Creole",
        "ko" => "Korean",
        "ha" => "Hausa",
        "nl" => "Dutch",
        "ky" => "Kyrgyz",
        "gl" => "Galician",
        "ca" => "Catalan",
        "cs" => "Czech",
        "kn" => "Kannada",
        "co" => "Corsican",
        "hr" => "Croatian",
        "ku" => "Kurdish",
        "la" => "Latin",
        "lv" => "Latvian",
        "lo" => "Lao",
        "lt" => "Lithuanian",
        "lb" => "Luxembourgish",
        "ro" => "Romanian",
        "mg" => "Malagasy",
        "mt" => "Maltese",
        "mr" => "Marathi",
        "ml" => "Malayalam",
        "ms" => "Malay",
        "mk" => "Macedonian",
        "mi" => "Maori",
        "mn" => "Mongolian",
        "bn" => "Bengali",
        "my" => "Burmese",
        "hmn" => "Hmong",
        "xh" => "Xhosa",
        "zu" => "Zulu",
        "ne" => "Nepali",
        "no" => "Norwegian",
        "pa" => "Punjabi",
        "pt" => "Portuguese",
        "ps" => "Pashto",
        "ny" => "Chichewa",
        "ja" => "Japanese",
        "sv" => "Swedish",
        "sm" => "Samoan",
        "sr" => "Serbian",
        "st" => "Sesotho",
        "si" => "Sinhala",
        "eo" => "Esperanto",
        "sk" => "Slovak",
        "sl" => "Slovenian",
        "sw" => "Swahili",
        "gd" => "Scots Gaelic",
        "ceb" => "Cebuano",
        "so" => "Somali",
        "tg" => "Tajik",
        "te" => "Telugu",
        "ta" => "Tamil",
        "th" => "Thai",
        "tr" => "Turkish",
        "cy" => "Welsh",
        "ur" => "Urdu",
        "uk" => "Ukrainian",
        "uz" => "Uzbek",
        "iw" => "Hebrew",
        "el" => "Greek",
        "haw" => "Hawaiian",
        "sd" => "Sindhi",
        "hu" => "Hungarian",
        "sn" => "Shona",
        "hy" => "Armenian",
        "ig" => "Igbo",
        "it" => "Italian",
        "yi" => "Yiddish",
        "hi" => "Hindi",
        "su" => "Sundanese",
        "id" => "Indonesian",
        "jw" => "Javanese",
        "en" => "English",
        "yo" => "Yoruba",
        "vi" => "Vietnamese",
        "zh-TW" => "Chinese Traditional",
        "zh-CN" => "Chinese Simplified",
        "es" => "Spanish",
    ]
}

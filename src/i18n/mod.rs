//! Candidate languages offered as translation targets.
//!
//! # Architecture
//!
//! - `language`: Owned `Language` record (code + display name)
//! - `registry`: Built-in table of the translation provider's supported languages
//! - `provider`: `LanguageProvider` seam used to build a selection manager
//!
//! # Example
//!
//! ```rust,ignore
//! use translate_targets::i18n::{LanguageProvider, LanguageRegistry};
//!
//! let candidates = LanguageRegistry::get().supported_languages();
//! let french = LanguageRegistry::get().get_by_code("fr");
//! ```

mod language;
mod provider;
mod registry;

pub use language::Language;
pub use provider::{LanguageProvider, StaticLanguageProvider};
pub use registry::{LanguageConfig, LanguageRegistry};

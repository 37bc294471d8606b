pub mod cli;
pub mod config;
pub mod i18n;
pub mod preferences;
pub mod selection;
pub mod store;

pub use selection::{SelectionError, SelectionSet, SelectionStateManager};

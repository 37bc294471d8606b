//! Integration tests for the language selection flow
//!
//! These tests drive the manager through the public API the same way the
//! binary does: load from a provider and a store, apply actions, confirm.

use clap::Parser;
use std::collections::BTreeSet;
use tempfile::TempDir;

use translate_targets::{
    cli,
    i18n::{Language, LanguageProvider, LanguageRegistry, StaticLanguageProvider},
    preferences::{PreferenceStore, SelectedLanguageStore, KEY_OVERWRITE_EXISTING, KEY_SELECT_ALL},
    store::JsonFileStore,
    SelectionError, SelectionStateManager,
};

// ==================== Test Helpers ====================

fn create_test_store() -> (JsonFileStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(temp_dir.path().join("settings/prefs.json"));
    (store, temp_dir)
}

fn provider() -> StaticLanguageProvider {
    StaticLanguageProvider::new(vec![
        Language::new("en", "English"),
        Language::new("fr", "French"),
        Language::new("de", "German"),
    ])
}

fn codes(languages: &[Language]) -> Vec<&str> {
    languages.iter().map(Language::code).collect()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ==================== Workflow Tests ====================

#[test]
fn test_selection_survives_sessions() {
    let (store, _temp_dir) = create_test_store();

    // First session: pick French and German
    let mut first = SelectionStateManager::load(&provider(), store.clone(), "app").unwrap();
    first.toggle("fr").unwrap();
    first.toggle("de").unwrap();
    first.set_overwrite_existing(true);
    first.confirm(|_| {}).unwrap();
    drop(first);

    // Second session starts from the saved state
    let second = SelectionStateManager::load(&provider(), store, "app").unwrap();
    assert_eq!(codes(&second.current_selection()), vec!["de", "fr"]);
    assert!(second.preferences().overwrite_existing);
    assert!(!second.preferences().select_all);
}

#[test]
fn test_cancelled_session_keeps_previous_selection() {
    let (store, _temp_dir) = create_test_store();
    store.save_selected_codes("app", &set(&["en"])).unwrap();

    let mut manager = SelectionStateManager::load(&provider(), store.clone(), "app").unwrap();
    manager.set_select_all(true);
    // Discarded without confirm
    drop(manager);

    assert_eq!(store.selected_codes("app").unwrap(), set(&["en"]));
    // Flags are written on change regardless
    assert!(store.get_bool(KEY_SELECT_ALL).unwrap());
}

#[test]
fn test_scopes_are_isolated() {
    let (store, _temp_dir) = create_test_store();

    let mut a = SelectionStateManager::load(&provider(), store.clone(), "project-a").unwrap();
    a.toggle("en").unwrap();
    a.confirm(|_| {}).unwrap();

    let b = SelectionStateManager::load(&provider(), store, "project-b").unwrap();
    assert!(b.current_selection().is_empty());
}

#[test]
fn test_empty_confirm_reports_and_keeps_state() {
    let (store, _temp_dir) = create_test_store();
    let mut manager = SelectionStateManager::load(&provider(), store, "app").unwrap();
    let mut callback_calls = 0;

    let err = manager.confirm(|_| callback_calls += 1).unwrap_err();
    assert_eq!(err, SelectionError::EmptySelection);
    assert_eq!(callback_calls, 0);

    // The interaction stays usable after the error
    manager.toggle("de").unwrap();
    let confirmed = manager.confirm(|_| callback_calls += 1).unwrap();
    assert_eq!(codes(&confirmed), vec!["de"]);
    assert_eq!(callback_calls, 1);
}

#[test]
fn test_removed_candidate_drops_from_saved_selection() {
    let (store, _temp_dir) = create_test_store();
    store.save_selected_codes("app", &set(&["fr", "tlh"])).unwrap();

    let manager = SelectionStateManager::load(&provider(), store, "app").unwrap();
    assert_eq!(codes(&manager.current_selection()), vec!["fr"]);
}

#[test]
fn test_flag_change_writes_both_preferences() {
    let (store, _temp_dir) = create_test_store();
    let mut manager = SelectionStateManager::load(&provider(), store.clone(), "app").unwrap();

    manager.set_overwrite_existing(true);

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["flags"][KEY_OVERWRITE_EXISTING], serde_json::json!(true));
    assert_eq!(value["flags"][KEY_SELECT_ALL], serde_json::json!(false));
}

#[test]
fn test_unknown_cli_code_leaves_store_untouched() {
    let (store, _temp_dir) = create_test_store();
    let mut manager = SelectionStateManager::load(&provider(), store.clone(), "app").unwrap();

    let args = cli::Cli::try_parse_from(["translate-targets", "all", "overwrite", "tlh"]).unwrap();
    let err = cli::apply(&mut manager, &args.actions).unwrap_err();

    assert_eq!(err, SelectionError::InvalidCode("tlh".to_string()));
    assert!(!store.path().exists());
    assert!(manager.current_selection().is_empty());
}

// ==================== CLI Flow Tests ====================

#[test]
fn test_cli_actions_then_confirm() {
    let (store, _temp_dir) = create_test_store();
    let mut manager = SelectionStateManager::load(&provider(), store.clone(), "app").unwrap();

    let args = cli::Cli::try_parse_from(["translate-targets", "all", "en", "no-overwrite", "--confirm"])
        .unwrap();
    assert!(args.confirm);
    cli::apply(&mut manager, &args.actions).unwrap();
    let confirmed = manager.confirm(|_| {}).unwrap();

    assert_eq!(codes(&confirmed), vec!["de", "fr"]);
    assert_eq!(store.selected_codes("app").unwrap(), set(&["de", "fr"]));
    assert!(!store.get_bool(KEY_OVERWRITE_EXISTING).unwrap());
    assert!(store.get_bool(KEY_SELECT_ALL).unwrap());
}

// ==================== Registry Tests ====================

#[test]
fn test_registry_candidates_display_sorted() {
    let (store, _temp_dir) = create_test_store();
    let manager = SelectionStateManager::load(LanguageRegistry::get(), store, "app").unwrap();

    let candidates = manager.candidates();
    assert_eq!(candidates.len(), LanguageRegistry::get().supported_languages().len());
    assert!(candidates.windows(2).all(|w| w[0].code() < w[1].code()));
    assert_eq!(candidates[0].code(), "af");
}

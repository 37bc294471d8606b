//! Terminal front end for the selection manager.
//!
//! Actions are applied left to right, the same way a user would click
//! through the checkboxes:
//!
//! ```text
//! translate-targets all fr --confirm      # everything except French
//! translate-targets none de ja overwrite  # German and Japanese, overwrite on
//! ```

use crate::selection::{SelectionError, SelectionStateManager};
use clap::Parser;
use std::str::FromStr;
use tracing::debug;

/// One user action on the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectAll(bool),
    OverwriteExisting(bool),
    Toggle(String),
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Action::SelectAll(true)),
            "none" => Ok(Action::SelectAll(false)),
            "overwrite" => Ok(Action::OverwriteExisting(true)),
            "no-overwrite" => Ok(Action::OverwriteExisting(false)),
            "" => Err("language code must not be empty".to_string()),
            code => Ok(Action::Toggle(code.to_string())),
        }
    }
}

/// Pick translation target languages
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "translate-targets",
    version,
    about = "Pick the languages a project is translated into"
)]
pub struct Cli {
    /// Applied in order: all, none, overwrite, no-overwrite, or a language
    /// code to toggle (e.g. fr, zh-CN)
    #[arg(value_name = "ACTION")]
    pub actions: Vec<Action>,

    /// Save the selection and print the chosen languages
    #[arg(long)]
    pub confirm: bool,
}

/// Apply `actions` in order.
///
/// Every toggled code is checked against the candidates before anything
/// runs, so an unknown code leaves both the selection and the store
/// untouched.
///
/// # Returns
/// * `Ok(())` once all actions are applied
/// * `Err(SelectionError::InvalidCode)` for the first unknown code
pub fn apply(manager: &mut SelectionStateManager, actions: &[Action]) -> Result<(), SelectionError> {
    for action in actions {
        if let Action::Toggle(code) = action {
            if !manager.candidates().iter().any(|lang| lang.code() == code.as_str()) {
                return Err(SelectionError::InvalidCode(code.clone()));
            }
        }
    }

    for action in actions {
        debug!("Applying {:?}", action);
        match action {
            Action::SelectAll(on) => manager.set_select_all(*on),
            Action::OverwriteExisting(on) => manager.set_overwrite_existing(*on),
            Action::Toggle(code) => {
                manager.toggle(code)?;
            }
        }
    }
    Ok(())
}

/// Lay the candidates out as a checkbox grid, row by row.
pub fn render_grid(manager: &SelectionStateManager, columns: usize) -> String {
    let columns = columns.max(1);
    let cells: Vec<String> = manager
        .candidates()
        .iter()
        .map(|lang| {
            let mark = if manager.is_selected(lang.code()) { "x" } else { " " };
            format!("[{}] {}", mark, lang.label())
        })
        .collect();
    let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for row in 0..manager.grid_rows(columns) {
        let start = row * columns;
        let end = (start + columns).min(cells.len());
        let line = cells[start..end]
            .iter()
            .map(|cell| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Two status lines for the persisted flags.
pub fn render_flags(manager: &SelectionStateManager) -> String {
    let prefs = manager.preferences();
    let mark = |on: bool| if on { "x" } else { " " };
    format!(
        "[{}] Overwrite existing strings\n[{}] Select all\n",
        mark(prefs.overwrite_existing),
        mark(prefs.select_all)
    )
}

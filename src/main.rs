use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use translate_targets::cli::{self, Cli};
use translate_targets::config::Config;
use translate_targets::i18n::LanguageRegistry;
use translate_targets::store::JsonFileStore;
use translate_targets::{SelectionError, SelectionStateManager};

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translate_targets=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Using preferences at {} (scope '{}')",
        config.store_path.display(),
        config.project_scope
    );

    let store = JsonFileStore::new(&config.store_path);
    let mut manager =
        SelectionStateManager::load(LanguageRegistry::get(), store, &config.project_scope)?;

    // Nothing is applied or written when any action is invalid
    if let Err(e) = cli::apply(&mut manager, &args.actions) {
        error!("{}", e);
        return Ok(ExitCode::FAILURE);
    }

    print!("{}", cli::render_flags(&manager));
    println!();
    print!("{}", cli::render_grid(&manager, config.grid_columns));

    if !args.confirm {
        return Ok(ExitCode::SUCCESS);
    }

    println!();
    match manager.confirm(|languages| {
        for language in languages {
            println!("{}", language.label());
        }
    }) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e @ SelectionError::EmptySelection) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use whaledone_app::app::App;
use whaledone_app::config::{AppConfig, DEFAULT_CONFIG_PATH};
use whaledone_app::{build_registry, events, logging};
use whaledone_core::{Language, Preferences};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Anonymous compliments between coworkers.
///
/// Opens the preference store, starts a session from the sample data,
/// prints the home dashboard and exits. The event loop and the signup
/// countdown are driven through `App::run` by library callers; this binary
/// sends no events, so it drops the receiver.
#[derive(Debug, Parser)]
#[command(name = "whaledone")]
struct Cli {
    /// Config file. Missing files fall back to defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Preference backend (`sqlite` or `memory`).
    #[arg(long)]
    backend: Option<String>,

    /// Preference database. For SQLite a file path or `:memory:`.
    #[arg(long)]
    db: Option<String>,

    /// Display language: ko, en, zh or ja. Saved as the new preference.
    #[arg(long, value_parser = parse_language)]
    language: Option<Language>,
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::parse(s).ok_or_else(|| format!("unknown language '{s}'; expected ko, en, zh or ja"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config)?;
    if let Some(backend) = cli.backend {
        config.store.backend = backend;
    }
    if let Some(db) = cli.db {
        config.store.path = db;
    }
    if cli.language.is_some() {
        config.language = cli.language;
    }

    logging::init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    let registry = build_registry();
    let store = registry
        .create(&config.store_config())
        .await
        .with_context(|| format!("failed to open '{}' preference store", config.store.backend))?;

    let (tx, _rx) = events::channel();
    let mut app = App::new(Preferences::new(store), tx).await?;
    if let Some(language) = config.language {
        app.set_language(language).await?;
    }

    info!(
        "language: {} ({})",
        app.language().label(),
        app.language()
    );
    info!("\n{}", app.dashboard());

    Ok(())
}

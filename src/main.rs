//! taskdeck - Multi-user task management server
//!
//! Serves the REST API under `/api` with SQLite persistence.

use std::path::PathBuf;

use clap::Parser;
use taskdeck::api::{self, AppState};
use taskdeck::config::Config;
use taskdeck::{db, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "taskdeck", about = "Multi-user task management backend")]
struct Args {
    /// Path to a taskdeck.toml config file
    #[arg(long, env = "TASKDECK_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address override (e.g. 0.0.0.0:8080)
    #[arg(long)]
    bind: Option<String>,

    /// Database path override
    #[arg(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("taskdeck=info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir(&std::env::current_dir()?),
    };
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(path) = args.db {
        config.database.path = path;
    }

    let conn = db::open(&config.database.path)?;
    tracing::info!(path = %config.database.path.display(), "database ready");

    let app = api::router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!(addr = %config.server.bind, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

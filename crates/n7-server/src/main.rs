//! n7 server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus `N7_*`
//! environment variables, opens the SQLite store, and serves the catalog
//! API over HTTP.
//!
//! # External scheduling
//!
//! Set `refresh_interval_secs = 0` to disable the built-in timer and drive
//! the refresher from cron instead:
//!
//! ```text
//! n7 --config /etc/n7.toml refresh
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use n7_server::{ServerConfig, app, spawn_refresher};
use n7_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "N7 prompt catalog server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the HTTP API (the default).
  Serve,
  /// Stamp `last_update` once and exit.
  Refresh,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("N7"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store_path = server_cfg.resolved_store_path();
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let store = Arc::new(store);

  match cli.command.unwrap_or(Command::Serve) {
    Command::Refresh => {
      let stamp = n7_core::refresh::on_tick(store.as_ref())
        .await
        .context("refresh failed")?;
      tracing::info!(last_update = %stamp, "refreshed");
      Ok(())
    }
    Command::Serve => serve(store, &server_cfg).await,
  }
}

async fn serve(store: Arc<SqliteStore>, cfg: &ServerConfig) -> anyhow::Result<()> {
  match cfg.refresh_interval() {
    Some(period) => {
      spawn_refresher(store.clone(), period);
    }
    None => tracing::info!("in-process refresher disabled"),
  }

  let address = cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app(store, cfg))
    .await
    .context("server error")?;

  Ok(())
}

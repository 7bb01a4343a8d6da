//! Server wiring for the N7 prompt catalog.
//!
//! Holds the runtime configuration, the application builder, and the
//! interval task that drives the periodic refresher. The binary in
//! `main.rs` only parses arguments and calls into this crate.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use axum::Router;
use n7_api::AppState;
use n7_core::{refresh::on_tick, store::CatalogStore};
use serde::Deserialize;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `N7_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                  String,
  pub port:                  u16,
  /// Title injected into every response (`N7_TITLE`).
  pub title:                 String,
  pub store_path:            PathBuf,
  /// Seconds between refresher ticks. `0` disables the in-process timer,
  /// leaving refreshes to an external scheduler.
  pub refresh_interval_secs: u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                  "127.0.0.1".to_string(),
      port:                  8787,
      title:                 "N7 Prompting Sheet".to_string(),
      store_path:            PathBuf::from("n7.sqlite3"),
      refresh_interval_secs: 3600,
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn refresh_interval(&self) -> Option<Duration> {
    (self.refresh_interval_secs > 0)
      .then(|| Duration::from_secs(self.refresh_interval_secs))
  }

  /// `store_path` with a leading `~` expanded.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// Build the HTTP application: the API router plus request tracing.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: CatalogStore + 'static,
{
  n7_api::router(AppState::new(store, config.title.as_str()))
    .layer(TraceLayer::new_for_http())
}

// ─── Refresher ────────────────────────────────────────────────────────────────

/// Spawn a task that calls [`on_tick`] every `period`.
///
/// The first tick fires immediately. A failed tick is logged and not
/// retried; the next tick happens on schedule.
pub fn spawn_refresher<S>(store: Arc<S>, period: Duration) -> JoinHandle<()>
where
  S: CatalogStore + 'static,
{
  tracing::info!(?period, "starting refresher");
  tokio::spawn(async move {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
      interval.tick().await;
      if let Err(e) = on_tick(store.as_ref()).await {
        tracing::warn!(error = %e, "refresh tick failed");
      }
    }
  })
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

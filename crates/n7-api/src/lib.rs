//! HTTP surface for the N7 prompt catalog.
//!
//! Exposes an axum [`Router`] backed by any [`n7_core::store::CatalogStore`].
//! Transport concerns (binding, tracing layers) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = n7_api::router(AppState::new(store, "N7 Prompting Sheet"));
//! ```

pub mod error;
pub mod handlers;
pub mod response;
pub mod ui;

use std::sync::Arc;

use axum::{Router, routing::get};
use n7_core::store::CatalogStore;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store: Arc<S>,
  /// Title injected into every response.
  pub title: Arc<str>,
}

impl<S> AppState<S> {
  pub fn new(store: Arc<S>, title: impl Into<Arc<str>>) -> Self {
    Self {
      store,
      title: title.into(),
    }
  }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
      title: Arc::clone(&self.title),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full GET-only router for `state`.
///
/// Unknown paths get a 404 JSON body `{"error": "Not Found"}`.
pub fn router<S>(state: AppState<S>) -> Router<()>
where
  S: CatalogStore + 'static,
{
  Router::new()
    .route("/", get(handlers::banner::<S>))
    .route("/ui", get(ui::page::<S>))
    .route("/prompts", get(handlers::list::<S>))
    .route("/random", get(handlers::random::<S>))
    .route("/status", get(handlers::status_handler::<S>))
    .fallback(handlers::not_found)
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

//! The `CatalogStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `n7-store-sqlite`).
//! The loader, refresher, and API router depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

/// Key under which the catalog JSON is stored.
pub const CATALOG_KEY: &str = "catalog";

/// Key under which the refresher writes its ISO-8601 timestamp.
pub const LAST_UPDATE_KEY: &str = "last_update";

/// A durable string-keyed store of string values.
///
/// Values are opaque to the store; callers encode and decode JSON
/// themselves. A missing key is `Ok(None)`, never an error, so that callers
/// can tell absence apart from a backend failure.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the value stored under `key`.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Insert or overwrite the value stored under `key`.
  fn put<'a>(
    &'a self,
    key: &'a str,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

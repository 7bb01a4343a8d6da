//! Error types for `n7-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A tag filter left nothing to choose from. `None` means the catalog
  /// itself holds no prompts.
  #[error("no prompts for tag {0:?}")]
  NoMatch(Option<String>),

  #[error("invalid catalog: {0}")]
  InvalidCatalog(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  /// Wrap a backend error from a [`CatalogStore`](crate::store::CatalogStore).
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! [`MemoryStore`] — a process-local [`CatalogStore`].
//!
//! Used as the test double throughout the workspace. It records how many
//! writes it has accepted and can be switched into a failing mode to
//! exercise error propagation.

use std::{
  collections::HashMap,
  sync::{
    Arc, RwLock,
    atomic::{AtomicBool, AtomicUsize, Ordering},
  },
};

use thiserror::Error;

use crate::store::CatalogStore;

#[derive(Debug, Error)]
pub enum MemoryStoreError {
  #[error("store unavailable")]
  Unavailable,
  #[error("store lock poisoned")]
  Poisoned,
}

/// An in-memory key-value store.
///
/// Cloning is cheap and clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: Arc<RwLock<HashMap<String, String>>>,
  writes:  Arc<AtomicUsize>,
  failing: Arc<AtomicBool>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Number of successful `put` calls so far.
  pub fn writes(&self) -> usize { self.writes.load(Ordering::SeqCst) }

  /// When `true`, every subsequent `get` and `put` fails.
  pub fn set_failing(&self, failing: bool) {
    self.failing.store(failing, Ordering::SeqCst);
  }

  /// Read a key without going through the async trait.
  pub fn peek(&self, key: &str) -> Option<String> {
    self.entries.read().ok()?.get(key).cloned()
  }

  fn check(&self) -> Result<(), MemoryStoreError> {
    if self.failing.load(Ordering::SeqCst) {
      Err(MemoryStoreError::Unavailable)
    } else {
      Ok(())
    }
  }
}

impl CatalogStore for MemoryStore {
  type Error = MemoryStoreError;

  async fn get(&self, key: &str) -> Result<Option<String>, MemoryStoreError> {
    self.check()?;
    let entries = self
      .entries
      .read()
      .map_err(|_| MemoryStoreError::Poisoned)?;
    Ok(entries.get(key).cloned())
  }

  async fn put(&self, key: &str, value: String) -> Result<(), MemoryStoreError> {
    self.check()?;
    self
      .entries
      .write()
      .map_err(|_| MemoryStoreError::Poisoned)?
      .insert(key.to_owned(), value);
    self.writes.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn get_missing_returns_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("nope").await.unwrap(), None);
  }

  #[tokio::test]
  async fn put_overwrites_and_counts() {
    let store = MemoryStore::new();
    store.put("k", "1".into()).await.unwrap();
    store.put("k", "2".into()).await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("2"));
    assert_eq!(store.writes(), 2);
  }

  #[tokio::test]
  async fn failing_mode_errors() {
    let store = MemoryStore::new();
    store.set_failing(true);
    assert!(store.get("k").await.is_err());
    assert!(store.put("k", "v".into()).await.is_err());
    assert_eq!(store.writes(), 0);
  }
}

//! Catalog loading with lazy seeding.

use tracing::{debug, info};

use crate::{
  Catalog, Error, Result,
  seed::seed,
  store::{CATALOG_KEY, CatalogStore, LAST_UPDATE_KEY},
};

/// Return the stored catalog, writing the built-in seed first if the store
/// has none.
///
/// A backend failure is returned as [`Error::Store`] and never triggers a
/// reseed, so a transient outage cannot overwrite real data with defaults.
/// Concurrent cold-start callers may each write the seed; the writes are
/// identical.
pub async fn load_catalog<S>(store: &S) -> Result<Catalog>
where
  S: CatalogStore,
{
  let stored = store.get(CATALOG_KEY).await.map_err(Error::store)?;

  if let Some(raw) = stored {
    debug!("catalog loaded from store");
    return Catalog::from_json(&raw);
  }

  let catalog = seed();
  store
    .put(CATALOG_KEY, catalog.to_json()?)
    .await
    .map_err(Error::store)?;
  info!(
    categories = catalog.categories().len(),
    "seeded empty store with default catalog"
  );
  Ok(catalog)
}

/// Read the refresher's last timestamp, if any tick has run yet.
pub async fn last_update<S>(store: &S) -> Result<Option<String>>
where
  S: CatalogStore,
{
  store.get(LAST_UPDATE_KEY).await.map_err(Error::store)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Prompt, memory::MemoryStore, query::count};

  #[tokio::test]
  async fn cold_start_seeds_once() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store).await.unwrap();
    assert_eq!(catalog, seed());
    assert_eq!(store.writes(), 1);
    assert_eq!(store.peek(CATALOG_KEY), Some(seed().to_json().unwrap()));
  }

  #[tokio::test]
  async fn seeded_store_is_read_without_writes() {
    let store = MemoryStore::new();
    load_catalog(&store).await.unwrap();
    let writes = store.writes();

    let first = load_catalog(&store).await.unwrap();
    let second = load_catalog(&store).await.unwrap();
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(store.writes(), writes);
  }

  #[tokio::test]
  async fn existing_catalog_is_returned_as_is() {
    let store = MemoryStore::new();
    let mut custom = Catalog::new();
    custom
      .push_category("Only", vec![Prompt::new("one").with_tags(["t"])])
      .unwrap();
    store
      .put(CATALOG_KEY, custom.to_json().unwrap())
      .await
      .unwrap();

    let loaded = load_catalog(&store).await.unwrap();
    assert_eq!(loaded, custom);
    assert_eq!(count(&loaded), 1);
    assert_eq!(store.writes(), 1);
  }

  #[tokio::test]
  async fn store_failure_propagates_without_reseed() {
    let store = MemoryStore::new();
    store.set_failing(true);
    let err = load_catalog(&store).await.unwrap_err();
    assert!(matches!(err, Error::Store(_)), "{err}");

    store.set_failing(false);
    assert_eq!(store.writes(), 0);
    assert_eq!(store.peek(CATALOG_KEY), None);
  }

  #[tokio::test]
  async fn malformed_catalog_is_invalid_not_reseeded() {
    let store = MemoryStore::new();
    store
      .put(CATALOG_KEY, r#"{"broken": 42}"#.into())
      .await
      .unwrap();
    let err = load_catalog(&store).await.unwrap_err();
    assert!(matches!(err, Error::InvalidCatalog(_)), "{err}");
    assert_eq!(store.peek(CATALOG_KEY).as_deref(), Some(r#"{"broken": 42}"#));
  }

  #[tokio::test]
  async fn last_update_absent_is_none() {
    let store = MemoryStore::new();
    assert_eq!(last_update(&store).await.unwrap(), None);
  }
}

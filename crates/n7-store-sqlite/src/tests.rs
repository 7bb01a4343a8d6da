//! Integration tests for `SqliteStore` against an in-memory database.

use n7_core::{
  Error as CoreError,
  loader::{last_update, load_catalog},
  query::count,
  refresh::on_tick,
  seed::seed,
  store::{CATALOG_KEY, CatalogStore, LAST_UPDATE_KEY},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Key-value ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert_eq!(s.get("missing").await.unwrap(), None);
  assert_eq!(s.updated_at("missing").await.unwrap(), None);
}

#[tokio::test]
async fn put_then_get() {
  let s = store().await;
  s.put("greeting", "hello".into()).await.unwrap();
  assert_eq!(s.get("greeting").await.unwrap().as_deref(), Some("hello"));
  assert!(s.updated_at("greeting").await.unwrap().is_some());
}

#[tokio::test]
async fn put_overwrites_existing_value() {
  let s = store().await;
  s.put("k", "first".into()).await.unwrap();
  s.put("k", "second".into()).await.unwrap();
  assert_eq!(s.get("k").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn keys_are_independent() {
  let s = store().await;
  s.put(CATALOG_KEY, "{}".into()).await.unwrap();
  s.put(LAST_UPDATE_KEY, "2024-01-01T00:00:00.000Z".into())
    .await
    .unwrap();
  assert_eq!(s.get(CATALOG_KEY).await.unwrap().as_deref(), Some("{}"));
  assert_eq!(
    s.get(LAST_UPDATE_KEY).await.unwrap().as_deref(),
    Some("2024-01-01T00:00:00.000Z")
  );
}

#[tokio::test]
async fn clones_share_the_connection() {
  let s = store().await;
  let other = s.clone();
  s.put("shared", "yes".into()).await.unwrap();
  assert_eq!(other.get("shared").await.unwrap().as_deref(), Some("yes"));
}

// ─── Catalog lifecycle ───────────────────────────────────────────────────────

#[tokio::test]
async fn loader_seeds_and_persists_catalog() {
  let s = store().await;
  let catalog = load_catalog(&s).await.unwrap();
  assert_eq!(count(&catalog), 11);

  let raw = s.get(CATALOG_KEY).await.unwrap().expect("seed persisted");
  assert_eq!(raw, seed().to_json().unwrap());

  let stamp = s.updated_at(CATALOG_KEY).await.unwrap();
  let again = load_catalog(&s).await.unwrap();
  assert_eq!(again, catalog);
  assert_eq!(s.updated_at(CATALOG_KEY).await.unwrap(), stamp);
}

#[tokio::test]
async fn loader_rejects_corrupt_catalog() {
  let s = store().await;
  s.put(CATALOG_KEY, "not json".into()).await.unwrap();
  let err = load_catalog(&s).await.unwrap_err();
  assert!(matches!(err, CoreError::InvalidCatalog(_)), "{err}");
}

#[tokio::test]
async fn tick_is_visible_to_last_update() {
  let s = store().await;
  let stamp = on_tick(&s).await.unwrap();
  assert_eq!(last_update(&s).await.unwrap(), Some(stamp));
}

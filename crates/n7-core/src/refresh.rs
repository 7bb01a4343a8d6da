//! The periodic refresher's single tick.
//!
//! Scheduling lives with the caller (an interval task in the server binary,
//! or an external scheduler invoking the `refresh` subcommand). A tick
//! writes unconditionally and does not retry.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::{
  Error, Result,
  store::{CatalogStore, LAST_UPDATE_KEY},
};

/// Format a timestamp the way it is stored: RFC 3339, UTC, milliseconds,
/// `Z` suffix (e.g. `2024-05-01T12:00:00.000Z`).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
  at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Write `at` to the `last_update` key and return the stored string.
pub async fn refresh<S>(store: &S, at: DateTime<Utc>) -> Result<String>
where
  S: CatalogStore,
{
  let stamp = format_timestamp(at);
  store
    .put(LAST_UPDATE_KEY, stamp.clone())
    .await
    .map_err(Error::store)?;
  debug!(last_update = %stamp, "refreshed timestamp");
  Ok(stamp)
}

/// One scheduler tick: stamp the store with the current time.
pub async fn on_tick<S>(store: &S) -> Result<String>
where
  S: CatalogStore,
{
  refresh(store, Utc::now()).await
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;
  use crate::{loader::last_update, memory::MemoryStore};

  #[test]
  fn timestamp_format_has_millis_and_z() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    assert_eq!(format_timestamp(at), "2024-05-01T12:00:00.000Z");
  }

  #[tokio::test]
  async fn refresh_writes_last_update() {
    let store = MemoryStore::new();
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let stamp = refresh(&store, at).await.unwrap();
    assert_eq!(last_update(&store).await.unwrap(), Some(stamp));
  }

  #[tokio::test]
  async fn successive_ticks_are_non_decreasing() {
    let store = MemoryStore::new();
    let first = on_tick(&store).await.unwrap();
    let second = on_tick(&store).await.unwrap();
    let parse = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();
    assert!(parse(&second) >= parse(&first));
    assert_eq!(last_update(&store).await.unwrap(), Some(second));
  }

  #[tokio::test]
  async fn failed_write_is_reported() {
    let store = MemoryStore::new();
    store.set_failing(true);
    assert!(matches!(on_tick(&store).await, Err(Error::Store(_))));
  }
}

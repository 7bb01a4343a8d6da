//! JSON and text handlers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Plain-text banner |
//! | `GET`  | `/prompts` | Whole catalog with title and total |
//! | `GET`  | `/random` | Optional `?tag=`; 404 when nothing matches |
//! | `GET`  | `/status` | Title, last refresh, category names, total |

use axum::{
  extract::{Query, State},
  http::Uri,
};
use n7_core::{
  Catalog, FlatPrompt, StatusRecord,
  loader::{last_update, load_catalog},
  query::{count, random_prompt, status},
  store::CatalogStore,
};
use serde::Serialize;

use crate::{AppState, error::ApiError, response::PrettyJson};

// ─── Banner ───────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn banner<S>(State(state): State<AppState<S>>) -> String
where
  S: CatalogStore,
{
  format!("{} API: /prompts /random /status /ui", state.title)
}

// ─── Prompts ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PromptsBody {
  pub title: String,
  pub total: usize,
  pub data:  Catalog,
}

/// `GET /prompts`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<PrettyJson<PromptsBody>, ApiError>
where
  S: CatalogStore,
{
  let catalog = load_catalog(state.store.as_ref()).await?;
  Ok(PrettyJson::ok(PromptsBody {
    title: state.title.to_string(),
    total: count(&catalog),
    data:  catalog,
  }))
}

// ─── Random ───────────────────────────────────────────────────────────────────

/// The first `tag` in `pairs`, if it is non-empty.
///
/// Repeated keys are allowed; later ones are ignored.
fn tag_filter(pairs: &[(String, String)]) -> Option<&str> {
  pairs
    .iter()
    .find(|(k, _)| k == "tag")
    .map(|(_, v)| v.as_str())
    .filter(|t| !t.is_empty())
}

#[derive(Debug, Serialize)]
pub struct RandomBody {
  pub title:  String,
  #[serde(flatten)]
  pub prompt: FlatPrompt,
}

/// `GET /random[?tag=<tag>]`
pub async fn random<S>(
  State(state): State<AppState<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<PrettyJson<RandomBody>, ApiError>
where
  S: CatalogStore,
{
  let catalog = load_catalog(state.store.as_ref()).await?;
  let tag = tag_filter(&pairs);
  let prompt = random_prompt(&catalog, tag, &mut rand::thread_rng())?;
  Ok(PrettyJson::ok(RandomBody {
    title: state.title.to_string(),
    prompt,
  }))
}

// ─── Status ───────────────────────────────────────────────────────────────────

/// `GET /status`
pub async fn status_handler<S>(
  State(state): State<AppState<S>>,
) -> Result<PrettyJson<StatusRecord>, ApiError>
where
  S: CatalogStore,
{
  let last = last_update(state.store.as_ref()).await?;
  let catalog = load_catalog(state.store.as_ref()).await?;
  Ok(PrettyJson::ok(status(&catalog, state.title.as_ref(), last)))
}

// ─── Fallback ─────────────────────────────────────────────────────────────────

/// Any unrouted path.
pub async fn not_found(uri: Uri) -> ApiError {
  ApiError::NotFound(uri.path().to_owned())
}

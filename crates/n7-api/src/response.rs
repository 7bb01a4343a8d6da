//! Response helpers shared by all handlers.

use axum::{
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Serialize;

pub(crate) fn no_store() -> HeaderValue { HeaderValue::from_static("no-store") }

/// A JSON body, pretty-printed with two-space indentation and marked
/// non-cacheable.
pub struct PrettyJson<T> {
  status: StatusCode,
  body:   T,
}

impl<T: Serialize> PrettyJson<T> {
  pub fn ok(body: T) -> Self { Self::with_status(StatusCode::OK, body) }

  pub fn with_status(status: StatusCode, body: T) -> Self {
    Self { status, body }
  }
}

impl<T: Serialize> IntoResponse for PrettyJson<T> {
  fn into_response(self) -> Response {
    match serde_json::to_string_pretty(&self.body) {
      Ok(body) => (
        self.status,
        [
          (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
          ),
          (header::CACHE_CONTROL, no_store()),
        ],
        body,
      )
        .into_response(),
      Err(e) => {
        tracing::error!(error = %e, "failed to serialise response body");
        (StatusCode::INTERNAL_SERVER_ERROR, "serialization error").into_response()
      }
    }
  }
}

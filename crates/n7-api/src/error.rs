//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::response::PrettyJson;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error(transparent)]
  Core(#[from] n7_core::Error),
}

impl ApiError {
  fn status_and_message(&self) -> (StatusCode, String) {
    match self {
      ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found".to_owned()),
      ApiError::Core(n7_core::Error::NoMatch(_)) => {
        (StatusCode::NOT_FOUND, "No prompts for that tag".to_owned())
      }
      ApiError::Core(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = self.status_and_message();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    } else {
      tracing::debug!(error = %self, "request rejected");
    }
    PrettyJson::with_status(status, json!({ "error": message })).into_response()
  }
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use audiva_storage::StorageError;

/// Errors surfaced by the API handlers.
///
/// Serialized as `{"message": ...}` with the matching status, the same
/// body shape for every failure so clients have one error path.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(&'static str),

  #[error("{0}")]
  BadRequest(String),

  #[error("storage error: {0}")]
  Storage(#[from] StorageError),

  #[error("asset error: {0}")]
  Asset(String),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Storage(_) | ApiError::Asset(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }

    (status, Json(json!({ "message": self.to_string() }))).into_response()
  }
}

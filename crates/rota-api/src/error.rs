//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The write conflicts with existing state; the client should refresh
  /// and retry.
  #[error("conflict: {0}")]
  Conflict(String),

  /// The request was well-formed but fails domain validation.
  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<rota_core::Error> for ApiError {
  fn from(e: rota_core::Error) -> Self {
    use rota_core::Error as E;
    match e {
      E::RequestNotFound(_) => Self::NotFound(e.to_string()),
      E::AlreadyApproved(_) | E::AlreadyRejected(_) | E::SlotAlreadyAssigned(_) => {
        Self::Conflict(e.to_string())
      }
      E::InvalidPeriod(_) => Self::BadRequest(e.to_string()),
      E::TeacherNotFound(_) | E::SelfCoverage | E::Validation(_) => {
        Self::Unprocessable(e.to_string())
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Unprocessable(m) => {
        (StatusCode::UNPROCESSABLE_ENTITY, m.clone())
      }
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

//! Handlers for `/requests` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/requests` | Optional `?status=pending\|approved\|rejected` |
//! | `GET`  | `/requests/:id` | 404 if not found |
//! | `POST` | `/requests` | Body: [`SubmitBody`]; returns 201 + stored request |
//! | `POST` | `/requests/:id/approve` | Body: [`ApproveBody`] |
//! | `POST` | `/requests/:id/reject` | No body |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use rota_core::{
  request::{NewRequest, ReasonCategory, ReliefRequest, RequestStatusKind},
  slot::Slot,
  store::ReliefStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub status: Option<RequestStatusKind>,
}

/// `GET /requests[?status=<status>]` — oldest submission first.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<ReliefRequest>>, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let requests = store.list_requests(params.status).await?;
  Ok(Json(requests))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /requests/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<ReliefRequest>, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let request = store
    .get_request(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("request {id} not found")))?;
  Ok(Json(request))
}

// ─── Submit ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /requests`.
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
  pub absent_teacher: Uuid,
  pub slot:           Slot,
  pub reason:         ReasonCategory,
  pub notes:          Option<String>,
  /// Already-authenticated actor name.
  pub submitted_by:   String,
}

impl From<SubmitBody> for NewRequest {
  fn from(b: SubmitBody) -> Self {
    NewRequest {
      absent_teacher: b.absent_teacher,
      slot:           b.slot,
      reason:         b.reason,
      notes:          b.notes,
      submitted_by:   b.submitted_by,
    }
  }
}

/// `POST /requests` — returns 201 + the stored
/// [`ReliefRequest`](rota_core::request::ReliefRequest).
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<SubmitBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let request = store.submit(NewRequest::from(body)).await?;
  Ok((StatusCode::CREATED, Json(request)))
}

// ─── Approve ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ApproveBody {
  pub relief_teacher: Uuid,
}

/// `POST /requests/:id/approve` — body: `{"relief_teacher":"<uuid>"}`
pub async fn approve_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<ApproveBody>,
) -> Result<Json<ReliefRequest>, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let request = store.approve(id, body.relief_teacher).await?;
  Ok(Json(request))
}

// ─── Reject ───────────────────────────────────────────────────────────────────

/// `POST /requests/:id/reject`
pub async fn reject_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<ReliefRequest>, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let request = store.reject(id).await?;
  Ok(Json(request))
}

//! Handlers for `/teachers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/teachers` | Optional `?department=` filter |
//! | `POST` | `/teachers` | Body: [`CreateBody`]; returns 201 + stored teacher |
//! | `GET`  | `/teachers/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use rota_core::{
  store::ReliefStore,
  teacher::{Department, NewTeacher, Teacher},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub department: Option<Department>,
}

/// `GET /teachers[?department=<department>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Teacher>>, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let teachers = store.list_teachers(params.department).await?;
  Ok(Json(teachers))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:       String,
  pub department: Department,
}

/// `POST /teachers` — body: `{"name":"Ms. Johnson","department":"mathematics"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let teacher = store
    .add_teacher(NewTeacher::new(body.name, body.department))
    .await?;
  Ok((StatusCode::CREATED, Json(teacher)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /teachers/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Teacher>, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let teacher = store
    .get_teacher(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("teacher {id} not found")))?;
  Ok(Json(teacher))
}

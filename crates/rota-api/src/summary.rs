//! Handler for `GET /summary`.
//!
//! The dashboard roll-up: slot counts by derived status, request counts
//! by lifecycle state, and teacher head-count per department. Recomputed
//! on every call — the stores are the single source of truth and the
//! inputs are bounded, so nothing is cached.

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State};
use rota_core::{
  store::ReliefStore,
  summary::{RequestSummary, ScheduleSummary, department_counts},
  teacher::Department,
};
use serde::Serialize;

use crate::error::ApiError;

/// The summary document returned by `GET /summary`.
#[derive(Debug, Serialize)]
pub struct SummaryDoc {
  pub schedule:    ScheduleSummary,
  pub requests:    RequestSummary,
  pub departments: BTreeMap<Department, usize>,
}

/// `GET /summary`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<SummaryDoc>, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let grid = store.grid(None, None).await?;
  let requests = store.list_requests(None).await?;
  let teachers = store.list_teachers(None).await?;

  Ok(Json(SummaryDoc {
    schedule:    ScheduleSummary::tally(&grid),
    requests:    RequestSummary::tally(&requests),
    departments: department_counts(&teachers),
  }))
}

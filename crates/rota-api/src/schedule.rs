//! Handler for `GET /schedule`.
//!
//! Returns the weekly grid projection. Slots with no entry are reported
//! as `available`; nothing is written by reading, and each read re-derives
//! slot status from stored inputs.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use rota_core::{
  schedule::SlotView,
  slot::{Period, Weekday},
  store::ReliefStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct GridParams {
  pub day:    Option<Weekday>,
  pub period: Option<Period>,
}

/// `GET /schedule[?day=<weekday>][&period=<1-8>]`
pub async fn grid<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<GridParams>,
) -> Result<Json<Vec<SlotView>>, ApiError>
where
  S: ReliefStore,
  ApiError: From<S::Error>,
{
  let views = store.grid(params.day, params.period).await?;
  Ok(Json(views))
}

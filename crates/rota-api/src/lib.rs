//! JSON REST API for Rota.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rota_core::store::ReliefStore`]. Auth, TLS, and transport concerns
//! are the caller's responsibility; the engine trusts the `submitted_by`
//! identity it is handed.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rota_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod requests;
pub mod schedule;
pub mod summary;
pub mod teachers;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use rota_core::store::ReliefStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ReliefStore + Clone + Send + Sync + 'static,
  ApiError: From<S::Error>,
{
  Router::new()
    // Teacher directory
    .route("/teachers", get(teachers::list::<S>).post(teachers::create::<S>))
    .route("/teachers/{id}", get(teachers::get_one::<S>))
    // Schedule grid
    .route("/schedule", get(schedule::grid::<S>))
    // Relief requests
    .route("/requests", get(requests::list::<S>).post(requests::submit::<S>))
    .route("/requests/{id}", get(requests::get_one::<S>))
    .route("/requests/{id}/approve", post(requests::approve_one::<S>))
    .route("/requests/{id}/reject", post(requests::reject_one::<S>))
    // Dashboard summary
    .route("/summary", get(summary::handler::<S>))
    .with_state(store)
}

//! The `ReliefStore` trait and supporting types.
//!
//! The trait is implemented by storage backends (the bundled one is
//! `rota-store-mem`). Higher layers (`rota-api`, `rota-server`) depend on
//! this abstraction, not on any concrete backend.
//!
//! All mutating operations are atomic: each either fully applies (request
//! transition plus schedule write) or fully fails, never partially. All
//! methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (tokio with `axum`).

use std::future::Future;

use uuid::Uuid;

use crate::{
  request::{NewRequest, ReliefRequest, RequestStatusKind},
  schedule::SlotView,
  slot::{Period, Slot, Weekday},
  teacher::{Department, NewTeacher, Teacher},
};

/// Abstraction over a Rota relief store backend.
pub trait ReliefStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Teacher directory ─────────────────────────────────────────────────

  /// Append a teacher to the directory. `teacher_id` and `created_at`
  /// are assigned by the store.
  fn add_teacher(
    &self,
    input: NewTeacher,
  ) -> impl Future<Output = Result<Teacher, Self::Error>> + Send + '_;

  /// Retrieve a teacher by id. Returns `None` if not found.
  fn get_teacher(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Teacher>, Self::Error>> + Send + '_;

  /// List the directory, optionally restricted to one department.
  fn list_teachers(
    &self,
    department: Option<Department>,
  ) -> impl Future<Output = Result<Vec<Teacher>, Self::Error>> + Send + '_;

  // ── Schedule ──────────────────────────────────────────────────────────

  /// Set or replace the assigned teacher for `slot` and return the slot
  /// as re-derived after the write. Last write wins; the one-entry-per-
  /// slot invariant holds because entries are keyed by slot.
  fn upsert_assignment(
    &self,
    slot: Slot,
    teacher_id: Uuid,
  ) -> impl Future<Output = Result<SlotView, Self::Error>> + Send + '_;

  /// Record an open coverage need for `slot`.
  ///
  /// Fails with `SlotAlreadyAssigned` if the slot already holds a
  /// confirmed assignment covering a *different* absence; re-requesting
  /// the absence an existing assignment covers is allowed.
  fn mark_requested(
    &self,
    slot: Slot,
    absent_teacher: Uuid,
    reason: Option<String>,
    originating_request: Option<Uuid>,
  ) -> impl Future<Output = Result<SlotView, Self::Error>> + Send + '_;

  /// Project the grid. Both filters are optional; `None` means every day
  /// or every period. A fully-qualified filter yields exactly one view.
  /// Unoccupied slots project as `Available`; no entry is synthesised on
  /// read, and re-reading a slot re-derives its conflict state.
  fn grid(
    &self,
    day: Option<Weekday>,
    period: Option<Period>,
  ) -> impl Future<Output = Result<Vec<SlotView>, Self::Error>> + Send + '_;

  // ── Relief requests ───────────────────────────────────────────────────

  /// Create a request in `Pending` and mark its slot requested, as one
  /// transaction. `submitted_at` is assigned by the store.
  fn submit(
    &self,
    input: NewRequest,
  ) -> impl Future<Output = Result<ReliefRequest, Self::Error>> + Send + '_;

  /// Transition a pending request to `Approved` and write the relief
  /// assignment into the schedule, as one transaction.
  ///
  /// Fails for an unknown id, a terminal request, an unknown relief
  /// teacher, or self-coverage (`relief_teacher` equals the request's
  /// absent teacher).
  fn approve(
    &self,
    request_id: Uuid,
    relief_teacher: Uuid,
  ) -> impl Future<Output = Result<ReliefRequest, Self::Error>> + Send + '_;

  /// Transition a pending request to `Rejected`. The slot's requested
  /// marker is cleared and no assignment is made.
  fn reject(
    &self,
    request_id: Uuid,
  ) -> impl Future<Output = Result<ReliefRequest, Self::Error>> + Send + '_;

  /// Retrieve a request by id. Returns `None` if not found.
  fn get_request(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<ReliefRequest>, Self::Error>> + Send + '_;

  /// List requests, optionally filtered by status — oldest submission
  /// first, for deterministic FIFO triage.
  fn list_requests(
    &self,
    status: Option<RequestStatusKind>,
  ) -> impl Future<Output = Result<Vec<ReliefRequest>, Self::Error>> + Send + '_;
}

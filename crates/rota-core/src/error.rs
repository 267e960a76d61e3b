//! Error types for `rota-core`.
//!
//! Every variant is recoverable and is surfaced to the caller
//! synchronously; a rejected operation leaves the store unchanged.

use thiserror::Error;
use uuid::Uuid;

use crate::slot::Slot;

#[derive(Debug, Error)]
pub enum Error {
  #[error("teacher not found: {0}")]
  TeacherNotFound(Uuid),

  #[error("relief request not found: {0}")]
  RequestNotFound(Uuid),

  #[error("request {0} is already approved")]
  AlreadyApproved(Uuid),

  #[error("request {0} is already rejected")]
  AlreadyRejected(Uuid),

  #[error("a teacher cannot cover their own absence")]
  SelfCoverage,

  #[error("period {0} is outside the teaching day")]
  InvalidPeriod(u8),

  /// Attempted to request coverage for a slot whose confirmed assignment
  /// covers a different absence.
  #[error("{0} already has a confirmed assignment")]
  SlotAlreadyAssigned(Slot),

  #[error("validation failed: {0}")]
  Validation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

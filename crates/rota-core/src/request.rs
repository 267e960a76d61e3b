//! Relief requests and their approval state machine.
//!
//! A request is created `Pending` and transitions exactly once, to
//! `Approved` or `Rejected`. Both outcomes are terminal; the transition is
//! guarded by the store, which fails a second resolution attempt instead
//! of silently re-resolving.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slot::Slot;

// ─── Reason ──────────────────────────────────────────────────────────────────

/// Why a teacher is absent. The set mirrors the request form.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "title_case")]
pub enum ReasonCategory {
  SickLeave,
  MedicalAppointment,
  ProfessionalDevelopment,
  PersonalLeave,
  FamilyEmergency,
  JuryDuty,
  Other,
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// The lifecycle state of a relief request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestStatus {
  Pending,
  Approved {
    /// The teacher assigned to cover the absence.
    relief_teacher: Uuid,
    at:             DateTime<Utc>,
  },
  Rejected {
    at: DateTime<Utc>,
  },
}

impl RequestStatus {
  pub fn is_pending(&self) -> bool { matches!(self, Self::Pending) }

  /// The field-free discriminant, used for filtering.
  pub fn kind(&self) -> RequestStatusKind {
    match self {
      Self::Pending => RequestStatusKind::Pending,
      Self::Approved { .. } => RequestStatusKind::Approved,
      Self::Rejected { .. } => RequestStatusKind::Rejected,
    }
  }
}

/// Discriminant of [`RequestStatus`] without the transition payloads.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatusKind {
  Pending,
  Approved,
  Rejected,
}

// ─── ReliefRequest ───────────────────────────────────────────────────────────

/// A request to cover an absent teacher's slot with a substitute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliefRequest {
  pub request_id:     Uuid,
  pub absent_teacher: Uuid,
  pub slot:           Slot,
  pub reason:         ReasonCategory,
  pub notes:          Option<String>,
  /// Already-authenticated actor name; authentication itself is the
  /// caller's concern.
  pub submitted_by:   String,
  /// Store-assigned timestamp; never accepted from callers.
  pub submitted_at:   DateTime<Utc>,
  pub status:         RequestStatus,
}

// ─── NewRequest ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::ReliefStore::submit`].
/// `request_id` and `submitted_at` are always set by the store.
#[derive(Debug, Clone)]
pub struct NewRequest {
  pub absent_teacher: Uuid,
  pub slot:           Slot,
  pub reason:         ReasonCategory,
  pub notes:          Option<String>,
  pub submitted_by:   String,
}

impl NewRequest {
  /// Convenience constructor with no notes.
  pub fn new(
    absent_teacher: Uuid,
    slot: Slot,
    reason: ReasonCategory,
    submitted_by: impl Into<String>,
  ) -> Self {
    Self {
      absent_teacher,
      slot,
      reason,
      notes: None,
      submitted_by: submitted_by.into(),
    }
  }
}

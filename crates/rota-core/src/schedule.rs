//! Schedule entries and derived slot status.
//!
//! An entry stores only its inputs: who is assigned, whose absence the
//! slot covers, and the request that produced it. The displayed status is
//! a pure function of those inputs, derived on every read and never
//! stored, so it cannot drift from the state that implies it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{request::RequestStatus, slot::Slot};

// ─── ScheduleEntry ───────────────────────────────────────────────────────────

/// The record occupying a slot. At most one entry exists per slot; slots
/// with no entry are implicitly available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
  pub slot:                Slot,
  pub assigned_teacher:    Option<Uuid>,
  /// Set when the slot arose from a covered absence.
  pub absent_teacher:      Option<Uuid>,
  pub reason:              Option<String>,
  /// Non-owning back-reference to the request that produced this entry.
  pub originating_request: Option<Uuid>,
}

impl ScheduleEntry {
  /// A fresh entry for `slot` with no assignment or absence recorded.
  pub fn empty(slot: Slot) -> Self {
    Self {
      slot,
      assigned_teacher: None,
      absent_teacher: None,
      reason: None,
      originating_request: None,
    }
  }
}

// ─── Derived status ──────────────────────────────────────────────────────────

/// The derived status of a slot.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SlotStatus {
  Available,
  Assigned,
  Conflict,
  Requested,
}

impl SlotStatus {
  /// Derive the status for `entry`, given the state of its originating
  /// request (if any). Precedence, first match wins: self-coverage
  /// conflict, pending request, confirmed assignment, available.
  pub fn derive(
    entry: &ScheduleEntry,
    originating: Option<&RequestStatus>,
  ) -> Self {
    if let Some(assigned) = entry.assigned_teacher
      && entry.absent_teacher == Some(assigned)
    {
      return Self::Conflict;
    }
    if originating.is_some_and(RequestStatus::is_pending) {
      return Self::Requested;
    }
    if entry.assigned_teacher.is_some() {
      Self::Assigned
    } else {
      Self::Available
    }
  }
}

// ─── SlotView ────────────────────────────────────────────────────────────────

/// The read projection of one slot: derived status plus the entry fields,
/// if an entry exists. Unoccupied slots project as `Available`; nothing is
/// written to the store by reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
  pub slot:                Slot,
  pub status:              SlotStatus,
  pub assigned_teacher:    Option<Uuid>,
  pub absent_teacher:      Option<Uuid>,
  pub reason:              Option<String>,
  pub originating_request: Option<Uuid>,
}

impl SlotView {
  /// Project an unoccupied slot.
  pub fn available(slot: Slot) -> Self {
    Self {
      slot,
      status: SlotStatus::Available,
      assigned_teacher: None,
      absent_teacher: None,
      reason: None,
      originating_request: None,
    }
  }

  /// Project `entry` with its status derived from `originating`.
  pub fn resolve(
    entry: &ScheduleEntry,
    originating: Option<&RequestStatus>,
  ) -> Self {
    Self {
      slot:                entry.slot,
      status:              SlotStatus::derive(entry, originating),
      assigned_teacher:    entry.assigned_teacher,
      absent_teacher:      entry.absent_teacher,
      reason:              entry.reason.clone(),
      originating_request: entry.originating_request,
    }
  }
}

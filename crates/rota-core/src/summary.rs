//! On-demand read projections over schedule, request, and directory
//! state.
//!
//! Everything here is a pure tally recomputed per call. The stores are
//! the single source of truth and both inputs are small and bounded, so
//! nothing caches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
  request::{ReliefRequest, RequestStatusKind},
  schedule::{SlotStatus, SlotView},
  teacher::{Department, Teacher},
};

// ─── Schedule ────────────────────────────────────────────────────────────────

/// Slot counts by derived status.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct ScheduleSummary {
  pub total:     usize,
  pub available: usize,
  pub assigned:  usize,
  pub requested: usize,
  pub conflict:  usize,
}

impl ScheduleSummary {
  pub fn tally(slots: &[SlotView]) -> Self {
    let mut summary = Self { total: slots.len(), ..Self::default() };
    for view in slots {
      match view.status {
        SlotStatus::Available => summary.available += 1,
        SlotStatus::Assigned => summary.assigned += 1,
        SlotStatus::Requested => summary.requested += 1,
        SlotStatus::Conflict => summary.conflict += 1,
      }
    }
    summary
  }
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Request counts by lifecycle state.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct RequestSummary {
  pub pending:  usize,
  pub approved: usize,
  pub rejected: usize,
}

impl RequestSummary {
  pub fn tally(requests: &[ReliefRequest]) -> Self {
    let mut summary = Self::default();
    for request in requests {
      match request.status.kind() {
        RequestStatusKind::Pending => summary.pending += 1,
        RequestStatusKind::Approved => summary.approved += 1,
        RequestStatusKind::Rejected => summary.rejected += 1,
      }
    }
    summary
  }
}

// ─── Directory ───────────────────────────────────────────────────────────────

/// Teacher head-count per department, for the directory roll-up.
pub fn department_counts(teachers: &[Teacher]) -> BTreeMap<Department, usize> {
  let mut counts = BTreeMap::new();
  for teacher in teachers {
    *counts.entry(teacher.department).or_insert(0) += 1;
  }
  counts
}

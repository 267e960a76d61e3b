//! [`MemStore`] — the in-memory implementation of [`ReliefStore`].

use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use rota_core::{
  Error, Result,
  request::{NewRequest, ReliefRequest, RequestStatus, RequestStatusKind},
  schedule::{ScheduleEntry, SlotView},
  slot::{Period, Slot, Weekday},
  store::ReliefStore,
  teacher::{Department, NewTeacher, Teacher},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An in-memory relief store.
///
/// Cloning is cheap — the state is reference-counted. One lock guards the
/// whole state: every mutating operation holds the write guard for its
/// full read-modify-write, which serialises concurrent transitions on the
/// same request or slot. Guard checks complete before the first mutation,
/// so a failed operation leaves the store unchanged.
#[derive(Clone, Default)]
pub struct MemStore {
  inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
  teachers: BTreeMap<Uuid, Teacher>,
  /// Keyed by slot, which is what makes the one-entry-per-slot invariant
  /// hold by construction.
  entries:  BTreeMap<Slot, ScheduleEntry>,
  requests: BTreeMap<Uuid, ReliefRequest>,
}

impl MemStore {
  /// Create an empty store.
  pub fn new() -> Self { Self::default() }
}

impl Inner {
  fn require_teacher(&self, id: Uuid) -> Result<()> {
    if self.teachers.contains_key(&id) {
      Ok(())
    } else {
      Err(Error::TeacherNotFound(id))
    }
  }

  /// Status of the request an entry points back to, if any.
  fn originating_status(&self, entry: &ScheduleEntry) -> Option<&RequestStatus> {
    entry
      .originating_request
      .and_then(|id| self.requests.get(&id))
      .map(|request| &request.status)
  }

  fn resolve(&self, slot: Slot) -> SlotView {
    match self.entries.get(&slot) {
      Some(entry) => SlotView::resolve(entry, self.originating_status(entry)),
      None => SlotView::available(slot),
    }
  }

  fn mark_requested(
    &mut self,
    slot: Slot,
    absent_teacher: Uuid,
    reason: Option<String>,
    originating_request: Option<Uuid>,
  ) -> Result<SlotView> {
    self.require_teacher(absent_teacher)?;

    // A confirmed assignment covering a different absence blocks the
    // request; re-requesting the same absence is allowed.
    if let Some(entry) = self.entries.get(&slot)
      && entry.assigned_teacher.is_some()
      && entry.absent_teacher != Some(absent_teacher)
    {
      return Err(Error::SlotAlreadyAssigned(slot));
    }

    let entry = self
      .entries
      .entry(slot)
      .or_insert_with(|| ScheduleEntry::empty(slot));
    entry.absent_teacher = Some(absent_teacher);
    entry.reason = reason;
    entry.originating_request = originating_request;

    Ok(self.resolve(slot))
  }
}

// ─── ReliefStore impl ────────────────────────────────────────────────────────

impl ReliefStore for MemStore {
  // There are no transport or encoding failures in this backend, so the
  // domain taxonomy is the whole error surface.
  type Error = Error;

  // ── Teacher directory ─────────────────────────────────────────────────

  async fn add_teacher(&self, input: NewTeacher) -> Result<Teacher> {
    if input.name.trim().is_empty() {
      return Err(Error::Validation("teacher name must not be empty".into()));
    }

    let teacher = Teacher {
      teacher_id: Uuid::new_v4(),
      name:       input.name,
      department: input.department,
      created_at: Utc::now(),
    };

    let mut inner = self.inner.write().await;
    inner.teachers.insert(teacher.teacher_id, teacher.clone());
    Ok(teacher)
  }

  async fn get_teacher(&self, id: Uuid) -> Result<Option<Teacher>> {
    Ok(self.inner.read().await.teachers.get(&id).cloned())
  }

  async fn list_teachers(
    &self,
    department: Option<Department>,
  ) -> Result<Vec<Teacher>> {
    let inner = self.inner.read().await;
    let mut teachers: Vec<Teacher> = inner
      .teachers
      .values()
      .filter(|t| department.is_none_or(|d| t.department == d))
      .cloned()
      .collect();
    teachers.sort_by(|a, b| {
      (a.created_at, a.teacher_id).cmp(&(b.created_at, b.teacher_id))
    });
    Ok(teachers)
  }

  // ── Schedule ──────────────────────────────────────────────────────────

  async fn upsert_assignment(
    &self,
    slot: Slot,
    teacher_id: Uuid,
  ) -> Result<SlotView> {
    let mut inner = self.inner.write().await;
    inner.require_teacher(teacher_id)?;

    let entry = inner
      .entries
      .entry(slot)
      .or_insert_with(|| ScheduleEntry::empty(slot));
    entry.assigned_teacher = Some(teacher_id);

    Ok(inner.resolve(slot))
  }

  async fn mark_requested(
    &self,
    slot: Slot,
    absent_teacher: Uuid,
    reason: Option<String>,
    originating_request: Option<Uuid>,
  ) -> Result<SlotView> {
    let mut inner = self.inner.write().await;
    inner.mark_requested(slot, absent_teacher, reason, originating_request)
  }

  async fn grid(
    &self,
    day: Option<Weekday>,
    period: Option<Period>,
  ) -> Result<Vec<SlotView>> {
    let inner = self.inner.read().await;
    Ok(
      Slot::week()
        .filter(|slot| day.is_none_or(|d| slot.day == d))
        .filter(|slot| period.is_none_or(|p| slot.period == p))
        .map(|slot| inner.resolve(slot))
        .collect(),
    )
  }

  // ── Relief requests ───────────────────────────────────────────────────

  async fn submit(&self, input: NewRequest) -> Result<ReliefRequest> {
    if input.submitted_by.trim().is_empty() {
      return Err(Error::Validation("submitted_by must not be empty".into()));
    }

    let mut inner = self.inner.write().await;
    inner.require_teacher(input.absent_teacher)?;

    let request = ReliefRequest {
      request_id:     Uuid::new_v4(),
      absent_teacher: input.absent_teacher,
      slot:           input.slot,
      reason:         input.reason,
      notes:          input.notes,
      submitted_by:   input.submitted_by,
      submitted_at:   Utc::now(),
      status:         RequestStatus::Pending,
    };

    // Mark first: a rejected mark must leave no trace of the request.
    inner.mark_requested(
      request.slot,
      request.absent_teacher,
      Some(request.reason.to_string()),
      Some(request.request_id),
    )?;
    inner.requests.insert(request.request_id, request.clone());

    Ok(request)
  }

  async fn approve(
    &self,
    request_id: Uuid,
    relief_teacher: Uuid,
  ) -> Result<ReliefRequest> {
    let mut inner = self.inner.write().await;
    inner.require_teacher(relief_teacher)?;

    let Some(request) = inner.requests.get_mut(&request_id) else {
      return Err(Error::RequestNotFound(request_id));
    };
    match request.status {
      RequestStatus::Pending => {}
      RequestStatus::Approved { .. } => {
        return Err(Error::AlreadyApproved(request_id));
      }
      RequestStatus::Rejected { .. } => {
        return Err(Error::AlreadyRejected(request_id));
      }
    }
    if relief_teacher == request.absent_teacher {
      return Err(Error::SelfCoverage);
    }

    // All guards passed; the transition and the schedule write land
    // together under the same guard.
    request.status =
      RequestStatus::Approved { relief_teacher, at: Utc::now() };
    let approved = request.clone();

    let entry = inner
      .entries
      .entry(approved.slot)
      .or_insert_with(|| ScheduleEntry::empty(approved.slot));
    entry.assigned_teacher = Some(relief_teacher);
    entry.absent_teacher = Some(approved.absent_teacher);
    entry.reason = Some(approved.reason.to_string());
    entry.originating_request = Some(request_id);

    Ok(approved)
  }

  async fn reject(&self, request_id: Uuid) -> Result<ReliefRequest> {
    let mut inner = self.inner.write().await;

    let Some(request) = inner.requests.get_mut(&request_id) else {
      return Err(Error::RequestNotFound(request_id));
    };
    match request.status {
      RequestStatus::Pending => {}
      RequestStatus::Approved { .. } => {
        return Err(Error::AlreadyApproved(request_id));
      }
      RequestStatus::Rejected { .. } => {
        return Err(Error::AlreadyRejected(request_id));
      }
    }

    request.status = RequestStatus::Rejected { at: Utc::now() };
    let rejected = request.clone();

    // Clear the requested marker only while it still points at this
    // request; a newer request on the same slot keeps its own marker.
    // Assignments are never removed by a rejection.
    let mut vacated = false;
    if let Some(entry) = inner.entries.get_mut(&rejected.slot)
      && entry.originating_request == Some(request_id)
    {
      entry.originating_request = None;
      if entry.assigned_teacher.is_none() {
        entry.absent_teacher = None;
        entry.reason = None;
        vacated = true;
      }
    }
    if vacated {
      inner.entries.remove(&rejected.slot);
    }

    Ok(rejected)
  }

  async fn get_request(&self, id: Uuid) -> Result<Option<ReliefRequest>> {
    Ok(self.inner.read().await.requests.get(&id).cloned())
  }

  async fn list_requests(
    &self,
    status: Option<RequestStatusKind>,
  ) -> Result<Vec<ReliefRequest>> {
    let inner = self.inner.read().await;
    let mut requests: Vec<ReliefRequest> = inner
      .requests
      .values()
      .filter(|r| status.is_none_or(|s| r.status.kind() == s))
      .cloned()
      .collect();
    requests.sort_by(|a, b| {
      (a.submitted_at, a.request_id).cmp(&(b.submitted_at, b.request_id))
    });
    Ok(requests)
  }
}

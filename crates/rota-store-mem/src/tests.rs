//! Behaviour tests for `MemStore`.

use rota_core::{
  Error,
  request::{NewRequest, ReasonCategory, RequestStatus, RequestStatusKind},
  schedule::SlotStatus,
  slot::{Period, Slot, Weekday},
  store::ReliefStore,
  summary::{RequestSummary, ScheduleSummary, department_counts},
  teacher::{Department, NewTeacher, Teacher},
};
use uuid::Uuid;

use crate::{MemStore, seed};

fn store() -> MemStore { MemStore::new() }

fn slot(day: Weekday, period: u8) -> Slot {
  Slot::new(day, Period::new(period).unwrap())
}

async fn add_teacher(
  store: &MemStore,
  name: &str,
  department: Department,
) -> Teacher {
  store
    .add_teacher(NewTeacher::new(name, department))
    .await
    .unwrap()
}

fn coverage_request(absent: &Teacher, slot: Slot) -> NewRequest {
  NewRequest::new(
    absent.teacher_id,
    slot,
    ReasonCategory::MedicalAppointment,
    "Admin",
  )
}

async fn slot_view(store: &MemStore, slot: Slot) -> rota_core::schedule::SlotView {
  let views = store.grid(Some(slot.day), Some(slot.period)).await.unwrap();
  assert_eq!(views.len(), 1);
  views.into_iter().next().unwrap()
}

// ─── Teacher directory ───────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_teacher() {
  let s = store();

  let teacher = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;
  assert_eq!(teacher.department, Department::Mathematics);

  let fetched = s.get_teacher(teacher.teacher_id).await.unwrap();
  assert!(fetched.is_some());
  let fetched = fetched.unwrap();
  assert_eq!(fetched.teacher_id, teacher.teacher_id);
  assert_eq!(fetched.name, "Ms. Johnson");
}

#[tokio::test]
async fn get_teacher_missing_returns_none() {
  let s = store();
  let result = s.get_teacher(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn list_teachers_filtered_by_department() {
  let s = store();
  add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;
  add_teacher(&s, "Mr. Smith", Department::English).await;
  add_teacher(&s, "Ms. Davis", Department::Mathematics).await;

  let all = s.list_teachers(None).await.unwrap();
  assert_eq!(all.len(), 3);

  let maths = s
    .list_teachers(Some(Department::Mathematics))
    .await
    .unwrap();
  assert_eq!(maths.len(), 2);
  assert!(maths.iter().all(|t| t.department == Department::Mathematics));
}

#[tokio::test]
async fn blank_teacher_name_is_rejected() {
  let s = store();
  let err = s
    .add_teacher(NewTeacher::new("  ", Department::Art))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
  assert!(s.list_teachers(None).await.unwrap().is_empty());
}

// ─── Grid ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_grid_is_fully_available() {
  let s = store();
  let views = s.grid(None, None).await.unwrap();
  assert_eq!(views.len(), 40);
  assert!(views.iter().all(|v| v.status == SlotStatus::Available));
  assert!(views.iter().all(|v| v.assigned_teacher.is_none()));
}

#[tokio::test]
async fn grid_filters_by_day_and_period() {
  let s = store();

  let monday = s.grid(Some(Weekday::Monday), None).await.unwrap();
  assert_eq!(monday.len(), 8);
  assert!(monday.iter().all(|v| v.slot.day == Weekday::Monday));

  let view = slot_view(&s, slot(Weekday::Monday, 4)).await;
  assert_eq!(view.slot, slot(Weekday::Monday, 4));
}

// ─── Assignments ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_assignment_sets_and_replaces() {
  let s = store();
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;
  let davis = add_teacher(&s, "Ms. Davis", Department::History).await;
  let target = slot(Weekday::Monday, 1);

  let view = s.upsert_assignment(target, johnson.teacher_id).await.unwrap();
  assert_eq!(view.status, SlotStatus::Assigned);
  assert_eq!(view.assigned_teacher, Some(johnson.teacher_id));

  // Last write wins.
  let view = s.upsert_assignment(target, davis.teacher_id).await.unwrap();
  assert_eq!(view.assigned_teacher, Some(davis.teacher_id));
  assert_eq!(
    s.grid(None, None)
      .await
      .unwrap()
      .iter()
      .filter(|v| v.status == SlotStatus::Assigned)
      .count(),
    1
  );
}

#[tokio::test]
async fn upsert_assignment_unknown_teacher_errors() {
  let s = store();
  let err = s
    .upsert_assignment(slot(Weekday::Monday, 1), Uuid::new_v4())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::TeacherNotFound(_)));

  let view = slot_view(&s, slot(Weekday::Monday, 1)).await;
  assert_eq!(view.status, SlotStatus::Available);
}

#[tokio::test]
async fn mark_requested_over_foreign_assignment_errors() {
  let s = store();
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let target = slot(Weekday::Monday, 1);

  s.upsert_assignment(target, johnson.teacher_id).await.unwrap();

  let err = s
    .mark_requested(target, brown.teacher_id, None, None)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::SlotAlreadyAssigned(_)));

  // The assignment is untouched.
  let view = slot_view(&s, target).await;
  assert_eq!(view.assigned_teacher, Some(johnson.teacher_id));
  assert_eq!(view.absent_teacher, None);
}

#[tokio::test]
async fn mark_requested_for_the_covered_absence_is_allowed() {
  let s = store();
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let target = slot(Weekday::Monday, 4);

  // Johnson already covers Brown's absence in this slot.
  let covered = s.submit(coverage_request(&brown, target)).await.unwrap();
  s.approve(covered.request_id, johnson.teacher_id).await.unwrap();

  // Re-requesting the same absence is not a conflicting write.
  let view = s
    .mark_requested(target, brown.teacher_id, None, None)
    .await
    .unwrap();
  assert_eq!(view.assigned_teacher, Some(johnson.teacher_id));
}

// ─── Submit ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn submit_creates_pending_and_marks_the_slot() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let target = slot(Weekday::Monday, 4);

  let request = s.submit(coverage_request(&brown, target)).await.unwrap();
  assert!(request.status.is_pending());
  assert_eq!(request.absent_teacher, brown.teacher_id);

  let view = slot_view(&s, target).await;
  assert_eq!(view.status, SlotStatus::Requested);
  assert_eq!(view.absent_teacher, Some(brown.teacher_id));
  assert_eq!(view.originating_request, Some(request.request_id));
}

#[tokio::test]
async fn submit_unknown_teacher_leaves_store_unchanged() {
  let s = store();
  let ghost = Teacher {
    teacher_id: Uuid::new_v4(),
    name:       "Ghost".into(),
    department: Department::Science,
    created_at: chrono::Utc::now(),
  };

  let err = s
    .submit(coverage_request(&ghost, slot(Weekday::Monday, 4)))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::TeacherNotFound(_)));

  assert!(s.list_requests(None).await.unwrap().is_empty());
  let view = slot_view(&s, slot(Weekday::Monday, 4)).await;
  assert_eq!(view.status, SlotStatus::Available);
}

#[tokio::test]
async fn submit_blank_submitter_is_rejected() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;

  let mut request = coverage_request(&brown, slot(Weekday::Monday, 4));
  request.submitted_by = "".into();
  let err = s.submit(request).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
  assert!(s.list_requests(None).await.unwrap().is_empty());
}

// ─── Approve ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn approve_assigns_the_relief_teacher() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;
  let target = slot(Weekday::Monday, 4);

  let request = s.submit(coverage_request(&brown, target)).await.unwrap();
  let approved = s
    .approve(request.request_id, johnson.teacher_id)
    .await
    .unwrap();
  assert!(matches!(
    approved.status,
    RequestStatus::Approved { relief_teacher, .. }
      if relief_teacher == johnson.teacher_id
  ));

  let view = slot_view(&s, target).await;
  assert_eq!(view.status, SlotStatus::Assigned);
  assert_eq!(view.assigned_teacher, Some(johnson.teacher_id));
  assert_eq!(view.absent_teacher, Some(brown.teacher_id));
}

#[tokio::test]
async fn approve_unknown_request_errors() {
  let s = store();
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;

  let err = s
    .approve(Uuid::new_v4(), johnson.teacher_id)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::RequestNotFound(_)));
}

#[tokio::test]
async fn approve_self_coverage_is_rejected() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let target = slot(Weekday::Monday, 4);

  let request = s.submit(coverage_request(&brown, target)).await.unwrap();
  let err = s
    .approve(request.request_id, brown.teacher_id)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::SelfCoverage));

  // The request is still pending and the slot untouched.
  let fetched = s.get_request(request.request_id).await.unwrap().unwrap();
  assert!(fetched.status.is_pending());
  let view = slot_view(&s, target).await;
  assert_eq!(view.status, SlotStatus::Requested);
  assert_eq!(view.assigned_teacher, None);
}

#[tokio::test]
async fn approve_then_reject_fails_terminal() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;
  let target = slot(Weekday::Monday, 4);

  let request = s.submit(coverage_request(&brown, target)).await.unwrap();
  s.approve(request.request_id, johnson.teacher_id).await.unwrap();

  let err = s.reject(request.request_id).await.unwrap_err();
  assert!(matches!(err, Error::AlreadyApproved(_)));

  // The failed call changed nothing.
  let view = slot_view(&s, target).await;
  assert_eq!(view.status, SlotStatus::Assigned);
  assert_eq!(view.assigned_teacher, Some(johnson.teacher_id));
}

#[tokio::test]
async fn reject_then_approve_fails_terminal() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;

  let request = s
    .submit(coverage_request(&brown, slot(Weekday::Monday, 4)))
    .await
    .unwrap();
  s.reject(request.request_id).await.unwrap();

  let err = s
    .approve(request.request_id, johnson.teacher_id)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::AlreadyRejected(_)));
}

// ─── Reject ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn reject_reverts_the_slot_to_available() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let target = slot(Weekday::Monday, 4);

  let request = s.submit(coverage_request(&brown, target)).await.unwrap();
  let rejected = s.reject(request.request_id).await.unwrap();
  assert!(matches!(rejected.status, RequestStatus::Rejected { .. }));

  let view = slot_view(&s, target).await;
  assert_eq!(view.status, SlotStatus::Available);
  assert_eq!(view.absent_teacher, None);
  assert_eq!(view.originating_request, None);
}

#[tokio::test]
async fn reject_only_clears_its_own_marker() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let target = slot(Weekday::Monday, 4);

  let first = s.submit(coverage_request(&brown, target)).await.unwrap();
  let second = s.submit(coverage_request(&brown, target)).await.unwrap();

  // The marker now points at the second request, so rejecting the first
  // must not revert the slot.
  s.reject(first.request_id).await.unwrap();
  let view = slot_view(&s, target).await;
  assert_eq!(view.status, SlotStatus::Requested);
  assert_eq!(view.originating_request, Some(second.request_id));
}

// ─── Competing requests ──────────────────────────────────────────────────────

#[tokio::test]
async fn second_approval_overwrites_without_error() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;
  let davis = add_teacher(&s, "Ms. Davis", Department::History).await;
  let target = slot(Weekday::Monday, 4);

  let first = s.submit(coverage_request(&brown, target)).await.unwrap();
  let second = s.submit(coverage_request(&brown, target)).await.unwrap();

  s.approve(first.request_id, johnson.teacher_id).await.unwrap();
  // Overwrite, not slot creation — the second approval must succeed.
  s.approve(second.request_id, davis.teacher_id).await.unwrap();

  // One occupied slot, last write wins, traceability follows the last
  // approval.
  let occupied: Vec<_> = s
    .grid(None, None)
    .await
    .unwrap()
    .into_iter()
    .filter(|v| v.status != SlotStatus::Available)
    .collect();
  assert_eq!(occupied.len(), 1);
  assert_eq!(occupied[0].slot, target);
  assert_eq!(occupied[0].assigned_teacher, Some(davis.teacher_id));
  assert_eq!(occupied[0].originating_request, Some(second.request_id));
}

// ─── Conflicts ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn assigning_the_absent_teacher_flags_a_conflict() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let target = slot(Weekday::Friday, 6);

  let request = s.submit(coverage_request(&brown, target)).await.unwrap();
  s.reject(request.request_id).await.unwrap();

  // Record the absence again, then assign the absent teacher directly —
  // the one write path that can produce self-coverage.
  s.mark_requested(target, brown.teacher_id, None, None)
    .await
    .unwrap();
  let view = s
    .upsert_assignment(target, brown.teacher_id)
    .await
    .unwrap();
  assert_eq!(view.status, SlotStatus::Conflict);
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_requests_is_fifo_by_submission() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;

  let first = s
    .submit(coverage_request(&brown, slot(Weekday::Monday, 1)))
    .await
    .unwrap();
  let second = s
    .submit(coverage_request(&brown, slot(Weekday::Monday, 2)))
    .await
    .unwrap();
  let third = s
    .submit(coverage_request(&brown, slot(Weekday::Monday, 3)))
    .await
    .unwrap();

  let listed = s.list_requests(None).await.unwrap();
  let ids: Vec<_> = listed.iter().map(|r| r.request_id).collect();
  assert_eq!(
    ids,
    vec![first.request_id, second.request_id, third.request_id]
  );
}

#[tokio::test]
async fn list_requests_filters_by_status() {
  let s = store();
  let brown = add_teacher(&s, "Dr. Brown", Department::Science).await;
  let johnson = add_teacher(&s, "Ms. Johnson", Department::Mathematics).await;

  let approved = s
    .submit(coverage_request(&brown, slot(Weekday::Monday, 1)))
    .await
    .unwrap();
  s.approve(approved.request_id, johnson.teacher_id).await.unwrap();
  let rejected = s
    .submit(coverage_request(&brown, slot(Weekday::Monday, 2)))
    .await
    .unwrap();
  s.reject(rejected.request_id).await.unwrap();
  s.submit(coverage_request(&brown, slot(Weekday::Monday, 3)))
    .await
    .unwrap();

  let pending = s
    .list_requests(Some(RequestStatusKind::Pending))
    .await
    .unwrap();
  assert_eq!(pending.len(), 1);
  assert!(pending[0].status.is_pending());

  let resolved = s
    .list_requests(Some(RequestStatusKind::Approved))
    .await
    .unwrap();
  assert_eq!(resolved.len(), 1);
  assert_eq!(resolved[0].request_id, approved.request_id);
}

// ─── Seeded demo ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn seeded_demo_projects_the_expected_counts() {
  let s = store();
  let roster = seed::demo(&s).await.unwrap();
  assert_eq!(roster.len(), 8);

  let grid = s.grid(None, None).await.unwrap();
  let schedule = ScheduleSummary::tally(&grid);
  assert_eq!(schedule.total, 40);
  assert_eq!(schedule.assigned, 6);
  assert_eq!(schedule.requested, 2);
  assert_eq!(schedule.conflict, 0);
  assert_eq!(schedule.available, 32);

  let requests = s.list_requests(None).await.unwrap();
  let summary = RequestSummary::tally(&requests);
  assert_eq!(summary.pending, 2);
  assert_eq!(summary.approved, 1);
  assert_eq!(summary.rejected, 1);

  let counts = department_counts(&roster);
  assert_eq!(counts.len(), 8);
  assert!(counts.values().all(|&n| n == 1));
}

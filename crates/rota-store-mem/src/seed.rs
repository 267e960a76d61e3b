//! Demo fixtures — the bootstrap roster and schedule used by the
//! server's seed mode and by tests that want a populated store.
//!
//! Everything is loaded through the public store operations, so the
//! seeded state is reachable by normal use. No conflict rows are seeded:
//! no workflow path produces self-coverage, so conflicts only appear when
//! an operator assigns the absent teacher directly.

use rota_core::{
  Result,
  request::{NewRequest, ReasonCategory},
  slot::{Period, Slot, Weekday},
  store::ReliefStore as _,
  teacher::{Department, NewTeacher, Teacher},
};

use crate::MemStore;

fn slot(day: Weekday, period: u8) -> Result<Slot> {
  Ok(Slot::new(day, Period::new(period)?))
}

/// Seed the demo data set and return the directory, in insertion order.
pub async fn demo(store: &MemStore) -> Result<Vec<Teacher>> {
  let johnson = store
    .add_teacher(NewTeacher::new("Ms. Johnson", Department::Mathematics))
    .await?;
  let smith = store
    .add_teacher(NewTeacher::new("Mr. Smith", Department::English))
    .await?;
  let brown = store
    .add_teacher(NewTeacher::new("Dr. Brown", Department::Science))
    .await?;
  let davis = store
    .add_teacher(NewTeacher::new("Ms. Davis", Department::History))
    .await?;
  let wilson = store
    .add_teacher(NewTeacher::new("Mr. Wilson", Department::PhysicalEducation))
    .await?;
  let anderson = store
    .add_teacher(NewTeacher::new("Ms. Anderson", Department::Art))
    .await?;
  let thompson = store
    .add_teacher(NewTeacher::new("Mr. Thompson", Department::Music))
    .await?;
  let garcia = store
    .add_teacher(NewTeacher::new("Ms. Garcia", Department::Spanish))
    .await?;

  // Confirmed regular assignments for the week.
  store
    .upsert_assignment(slot(Weekday::Monday, 1)?, johnson.teacher_id)
    .await?;
  store
    .upsert_assignment(slot(Weekday::Tuesday, 1)?, davis.teacher_id)
    .await?;
  store
    .upsert_assignment(slot(Weekday::Tuesday, 5)?, wilson.teacher_id)
    .await?;
  store
    .upsert_assignment(slot(Weekday::Thursday, 1)?, thompson.teacher_id)
    .await?;
  store
    .upsert_assignment(slot(Weekday::Friday, 2)?, garcia.teacher_id)
    .await?;

  // Open coverage needs.
  let mut request = NewRequest::new(
    brown.teacher_id,
    slot(Weekday::Monday, 4)?,
    ReasonCategory::MedicalAppointment,
    "Admin",
  );
  request.notes = Some("Science lab class, equipment list attached".into());
  store.submit(request).await?;

  let mut request = NewRequest::new(
    anderson.teacher_id,
    slot(Weekday::Wednesday, 3)?,
    ReasonCategory::ProfessionalDevelopment,
    "Admin",
  );
  request.notes = Some("Art class, materials ready".into());
  store.submit(request).await?;

  // A resolved pair, for request history.
  let mut request = NewRequest::new(
    anderson.teacher_id,
    slot(Weekday::Friday, 4)?,
    ReasonCategory::ProfessionalDevelopment,
    "Admin",
  );
  request.notes = Some("Workshop day, cover materials on the desk".into());
  let covered = store.submit(request).await?;
  store.approve(covered.request_id, johnson.teacher_id).await?;

  let mut request = NewRequest::new(
    wilson.teacher_id,
    slot(Weekday::Wednesday, 2)?,
    ReasonCategory::SickLeave,
    "Admin",
  );
  request.notes = Some("PE class, outdoor activity planned".into());
  let declined = store.submit(request).await?;
  store.reject(declined.request_id).await?;

  Ok(vec![
    johnson, smith, brown, davis, wilson, anderson, thompson, garcia,
  ])
}

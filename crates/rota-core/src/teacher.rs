//! The teacher directory — identities and departments.
//!
//! The directory is append-only from the engine's point of view: teachers
//! are added and referenced, never edited or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subject department. The set is fixed by the school.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum Department {
  Mathematics,
  English,
  Science,
  History,
  PhysicalEducation,
  Art,
  Music,
  Spanish,
}

/// A directory entry. `teacher_id` and `created_at` are assigned by the
/// store; all meaning beyond identity (contact details, room numbers) is
/// presentation and lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
  pub teacher_id: Uuid,
  pub name:       String,
  pub department: Department,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::ReliefStore::add_teacher`].
#[derive(Debug, Clone)]
pub struct NewTeacher {
  pub name:       String,
  pub department: Department,
}

impl NewTeacher {
  pub fn new(name: impl Into<String>, department: Department) -> Self {
    Self { name: name.into(), department }
  }
}

//! The weekly teaching grid — weekdays, bell periods, and slots.
//!
//! A [`Slot`] is a (weekday, period) coordinate. [`Period`] is bounded at
//! construction and on deserialisation, so any `Slot` held in memory lies
//! inside the 5×8 grid.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;

use crate::{Error, Result};

// ─── Weekday ─────────────────────────────────────────────────────────────────

/// A teaching day. The grid covers Monday through Friday only.
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
#[serde(rename_all = "lowercase")]
pub enum Weekday {
  Monday,
  Tuesday,
  Wednesday,
  Thursday,
  Friday,
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// A bell period, 1 through 8.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Period(u8);

impl Period {
  pub const FIRST: u8 = 1;
  pub const LAST: u8 = 8;

  /// Construct a period, rejecting numbers outside the teaching day.
  pub fn new(number: u8) -> Result<Self> {
    if (Self::FIRST..=Self::LAST).contains(&number) {
      Ok(Self(number))
    } else {
      Err(Error::InvalidPeriod(number))
    }
  }

  pub fn number(self) -> u8 { self.0 }

  /// The bell times for this period, from the school timetable.
  pub fn bell_times(self) -> &'static str {
    match self.0 {
      1 => "8:00-8:45",
      2 => "8:50-9:35",
      3 => "9:40-10:25",
      4 => "10:30-11:15",
      5 => "11:20-12:05",
      6 => "12:10-12:55",
      7 => "1:00-1:45",
      _ => "1:50-2:35",
    }
  }

  /// Every period of the teaching day, in order.
  pub fn all() -> impl Iterator<Item = Period> {
    (Self::FIRST..=Self::LAST).map(Period)
  }
}

impl TryFrom<u8> for Period {
  type Error = Error;

  fn try_from(number: u8) -> Result<Self> { Self::new(number) }
}

impl From<Period> for u8 {
  fn from(period: Period) -> u8 { period.0 }
}

impl fmt::Display for Period {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "period {}", self.0)
  }
}

// ─── Slot ────────────────────────────────────────────────────────────────────

/// A (weekday, period) coordinate in the weekly grid.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Slot {
  pub day:    Weekday,
  pub period: Period,
}

impl Slot {
  pub fn new(day: Weekday, period: Period) -> Self { Self { day, period } }

  /// Every slot in the week — Monday period 1 through Friday period 8.
  pub fn week() -> impl Iterator<Item = Slot> {
    Weekday::iter()
      .flat_map(|day| Period::all().map(move |period| Slot { day, period }))
  }
}

impl fmt::Display for Slot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.day, self.period)
  }
}

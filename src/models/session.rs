//! Session (weekly meeting) model.
//!
//! A session is one normalized weekly meeting of a course group: a weekday,
//! a run of whole-hour slots, and the term weeks in which it takes place.
//!
//! # Collision Model
//!
//! Two sessions collide iff all three hold:
//! - they fall on the same weekday,
//! - they share at least one occupied hour slot,
//! - they share at least one active week.
//!
//! Sessions overlapping in hours but active in disjoint weeks (e.g. labs on
//! alternating weeks) never collide.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::WeekSet;

/// Teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days, Monday first.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Converts a 1-based catalog day (1 = Monday .. 5 = Friday).
    pub fn from_catalog_day(day: u8) -> Option<Self> {
        match day {
            1..=5 => Some(Self::ALL[usize::from(day - 1)]),
            _ => None,
        }
    }

    /// 0-based day index (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Kind of meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Lecture. Catalog codes `T` and `G`.
    Theory,
    /// Laboratory. Catalog code `L`.
    Lab,
    /// Problem-solving class. Catalog code `P`.
    Problems,
}

impl SessionKind {
    /// Parses a one-letter catalog code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "T" | "G" => Some(Self::Theory),
            "L" => Some(Self::Lab),
            "P" => Some(Self::Problems),
            _ => None,
        }
    }

    /// Canonical one-letter code.
    pub fn code(self) -> char {
        match self {
            Self::Theory => 'T',
            Self::Lab => 'L',
            Self::Problems => 'P',
        }
    }
}

/// Enrollment group identifier.
///
/// Catalogs mix numeric (`10`) and textual (`"4ES1"`) group names. The raw
/// value is kept: `Number(10)` and `Text("10")` are different groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupId {
    Number(i64),
    Text(String),
}

impl From<i64> for GroupId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A normalized weekly meeting.
///
/// `hours` is derived from the start hour and duration at construction
/// (`start, start + 1, .., start + duration - 1`) and is always ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Course code.
    pub course: String,
    /// Enrollment group within the course.
    pub group: GroupId,
    /// Meeting day.
    pub day: Weekday,
    /// Occupied whole-hour slots, ascending.
    pub hours: Vec<u32>,
    /// Length in whole hours.
    pub duration: u32,
    /// Meeting kind.
    pub kind: SessionKind,
    /// Term weeks in which the meeting takes place.
    pub weeks: WeekSet,
}

impl Session {
    /// Creates a theory session with no active weeks.
    pub fn new(
        course: impl Into<String>,
        group: impl Into<GroupId>,
        day: Weekday,
        start_hour: u32,
        duration: u32,
    ) -> Self {
        Self {
            course: course.into(),
            group: group.into(),
            day,
            hours: (start_hour..start_hour.saturating_add(duration)).collect(),
            duration,
            kind: SessionKind::Theory,
            weeks: WeekSet::new(),
        }
    }

    /// Sets the meeting kind.
    pub fn with_kind(mut self, kind: SessionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the active weeks.
    pub fn with_weeks(mut self, weeks: impl IntoIterator<Item = u32>) -> Self {
        self.weeks = weeks.into_iter().collect();
        self
    }

    /// First occupied hour, or `None` for a zero-length session.
    #[inline]
    pub fn start_hour(&self) -> Option<u32> {
        self.hours.first().copied()
    }

    /// Exclusive end hour.
    #[inline]
    pub fn end_hour(&self) -> Option<u32> {
        self.hours.last().map(|h| h.saturating_add(1))
    }

    /// Whether the session occupies a given hour slot.
    #[inline]
    pub fn occupies(&self, hour: u32) -> bool {
        self.hours.binary_search(&hour).is_ok()
    }

    /// Whether two sessions share at least one hour slot, ignoring day and weeks.
    pub fn shares_hour(&self, other: &Self) -> bool {
        self.hours.iter().any(|&h| other.occupies(h))
    }

    /// Whether two sessions collide (same day, shared hour, shared week).
    pub fn collides_with(&self, other: &Self) -> bool {
        self.day == other.day && self.shares_hour(other) && self.weeks.intersects(&other.weeks)
    }
}

//! Raw catalog record.
//!
//! One record per scheduled meeting, in the shape produced by the timetable
//! export tooling. Field names follow that export (`codi_assig`, `grup`, ..).

use serde::{Deserialize, Serialize};

use super::{GroupId, Session, SessionKind, WeekSet, Weekday};
use crate::validation::{ValidationError, ValidationErrorKind};

/// A catalog meeting record as loaded from the export.
///
/// Nothing is interpreted at this level; use [`CatalogSession::to_session`]
/// (or build a [`Catalog`](crate::catalog::Catalog)) to obtain a normalized
/// [`Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSession {
    /// Course code.
    #[serde(rename = "codi_assig")]
    pub course: String,
    /// Group identifier, numeric or textual.
    #[serde(rename = "grup")]
    pub group: GroupId,
    /// 1-based weekday (1 = Monday .. 5 = Friday).
    #[serde(rename = "dia_setmana")]
    pub weekday: u8,
    /// Start time, `"HH:MM"`.
    #[serde(rename = "inici")]
    pub start: String,
    /// Duration in whole hours.
    #[serde(rename = "durada")]
    pub duration: u32,
    /// One-letter meeting kind code.
    #[serde(rename = "tipus")]
    pub kind: String,
    /// Active term weeks.
    #[serde(rename = "setmanes")]
    pub weeks: Vec<u32>,
}

impl CatalogSession {
    /// Creates a record.
    pub fn new(
        course: impl Into<String>,
        group: impl Into<GroupId>,
        weekday: u8,
        start: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            course: course.into(),
            group: group.into(),
            weekday,
            start: start.into(),
            duration,
            kind: "T".to_string(),
            weeks: Vec::new(),
        }
    }

    /// Sets the meeting kind code.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the active weeks.
    pub fn with_weeks(mut self, weeks: Vec<u32>) -> Self {
        self.weeks = weeks;
        self
    }

    /// Weekday, if the catalog day is within Monday..Friday.
    pub fn day(&self) -> Option<Weekday> {
        Weekday::from_catalog_day(self.weekday)
    }

    /// Start hour parsed from `"HH:MM"`. Minutes are validated but dropped.
    pub fn start_hour(&self) -> Option<u32> {
        let (hh, mm) = self.start.trim().split_once(':')?;
        let hour: u32 = hh.parse().ok()?;
        let minute: u32 = mm.parse().ok()?;
        (hour < 24 && minute < 60).then_some(hour)
    }

    /// Meeting kind, if the code is known.
    pub fn session_kind(&self) -> Option<SessionKind> {
        SessionKind::from_code(&self.kind)
    }

    /// Projects the record into a normalized [`Session`].
    ///
    /// Fails on the first field that cannot be interpreted. Use
    /// [`validate_catalog`](crate::validation::validate_catalog) to collect
    /// every problem in a catalog at once.
    pub fn to_session(&self) -> Result<Session, ValidationError> {
        let day = self.day().ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::WeekdayOutOfRange,
                format!("{} group {}: weekday {} outside 1..=5", self.course, self.group, self.weekday),
            )
        })?;
        let start_hour = self.start_hour().ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::InvalidStartTime,
                format!("{} group {}: cannot parse start '{}'", self.course, self.group, self.start),
            )
        })?;
        let kind = self.session_kind().ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::UnknownKind,
                format!("{} group {}: unknown kind code '{}'", self.course, self.group, self.kind),
            )
        })?;
        let end_hour = start_hour
            .checked_add(self.duration)
            .filter(|&end| end <= 24)
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::HourOverflow,
                    format!(
                        "{} group {}: {}h from {start_hour}:00 runs past midnight",
                        self.course, self.group, self.duration
                    ),
                )
            })?;

        Ok(Session {
            course: self.course.clone(),
            group: self.group.clone(),
            day,
            hours: (start_hour..end_hour).collect(),
            duration: self.duration,
            kind,
            weeks: WeekSet::from(self.weeks.clone()),
        })
    }
}

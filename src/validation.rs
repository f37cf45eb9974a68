//! Input validation for session catalogs.
//!
//! Checks structural integrity of raw catalog records before they are
//! projected into sessions. Detects:
//! - Empty course codes
//! - Weekdays outside Monday..Friday
//! - Unparseable start times
//! - Unknown meeting-kind codes
//! - Zero-length meetings and meetings running past midnight
//! - Meetings with no active week
//!
//! The generator and layout engine assume validated input and never
//! re-check it.

use crate::models::CatalogSession;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A record has a blank course code.
    EmptyCourseCode,
    /// The 1-based weekday is not in 1..=5.
    WeekdayOutOfRange,
    /// The start time is not a valid `"HH:MM"`.
    InvalidStartTime,
    /// The meeting-kind code is not one of `T`, `G`, `L`, `P`.
    UnknownKind,
    /// The meeting lasts zero hours.
    ZeroDuration,
    /// The meeting runs past 24:00.
    HourOverflow,
    /// The meeting has no active week.
    EmptyWeeks,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates raw catalog records.
///
/// Checks, per record:
/// 1. Course code is not blank
/// 2. Weekday is within 1..=5
/// 3. Start time parses as `"HH:MM"`
/// 4. Kind code is known
/// 5. Duration is at least one hour and ends by 24:00
/// 6. At least one active week
///
/// Records sharing a slot are accepted: the export keeps one record per
/// distinct duration, so a class can appear twice at the same start.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(records: &[CatalogSession]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, rec) in records.iter().enumerate() {
        let label = format!("record #{index} ({} group {})", rec.course, rec.group);

        if rec.course.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourseCode,
                format!("{label}: blank course code"),
            ));
        }

        if rec.day().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::WeekdayOutOfRange,
                format!("{label}: weekday {} outside 1..=5", rec.weekday),
            ));
        }

        match rec.start_hour() {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidStartTime,
                format!("{label}: cannot parse start '{}'", rec.start),
            )),
            Some(start) if start.saturating_add(rec.duration) > 24 => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::HourOverflow,
                    format!("{label}: {}h from {start}:00 runs past midnight", rec.duration),
                ))
            }
            Some(_) => {}
        }

        if rec.session_kind().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownKind,
                format!("{label}: unknown kind code '{}'", rec.kind),
            ));
        }

        if rec.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("{label}: zero duration"),
            ));
        }

        if rec.weeks.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWeeks,
                format!("{label}: no active weeks"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

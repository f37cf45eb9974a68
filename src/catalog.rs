//! Read-only session catalog.
//!
//! The catalog is built once from raw records, projects them into
//! [`Session`]s, and indexes them into per-course [`GroupBundle`]s. It is
//! never mutated afterwards; the generator borrows it for every run.
//!
//! # Bundle Order
//! Bundles of a course are listed in order of their group's first
//! appearance in the catalog, and sessions inside a bundle keep catalog
//! order. Generation order (and so tie-break order) follows from this.

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;
use tracing::debug;

use crate::models::{CatalogSession, GroupBundle, Session};
use crate::validation::{validate_catalog, ValidationError};

/// Errors raised while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog has {} invalid record(s), first: {}", .0.len(), first_message(.0))]
    Invalid(Vec<ValidationError>),
}

fn first_message(errors: &[ValidationError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}

/// Export envelope: `{ "results": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    results: Vec<CatalogSession>,
}

/// Immutable catalog of normalized sessions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sessions: Vec<Session>,
    bundles: HashMap<String, Vec<GroupBundle>>,
}

impl Catalog {
    /// Builds a catalog from already-normalized sessions.
    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        let mut bundles: HashMap<String, Vec<GroupBundle>> = HashMap::new();
        for session in &sessions {
            let course_bundles = bundles.entry(session.course.clone()).or_default();
            match course_bundles.iter_mut().find(|b| b.group == session.group) {
                Some(bundle) => bundle.sessions.push(session.clone()),
                None => course_bundles.push(
                    GroupBundle::new(session.course.clone(), session.group.clone())
                        .with_session(session.clone()),
                ),
            }
        }

        debug!(
            sessions = sessions.len(),
            courses = bundles.len(),
            groups = bundles.values().map(Vec::len).sum::<usize>(),
            "catalog indexed"
        );

        Self { sessions, bundles }
    }

    /// Validates raw records and builds the catalog.
    ///
    /// # Errors
    /// [`CatalogError::Invalid`] with every problem found by
    /// [`validate_catalog`].
    pub fn from_records(records: &[CatalogSession]) -> Result<Self, CatalogError> {
        validate_catalog(records).map_err(CatalogError::Invalid)?;
        let sessions = records
            .iter()
            .map(CatalogSession::to_session)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CatalogError::Invalid(vec![e]))?;
        Ok(Self::from_sessions(sessions))
    }

    /// Parses an export document (`{"results": [...]}`) and builds the catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use u_timetable::catalog::Catalog;
    ///
    /// let json = r#"{"results": [
    ///     {"codi_assig": "EA", "grup": "10", "dia_setmana": 1, "inici": "08:00",
    ///      "durada": 2, "tipus": "T", "setmanes": [1, 2, 3]}
    /// ]}"#;
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.courses(), vec!["EA".to_string()]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_records(&file.results)
    }

    /// All sessions, catalog order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Distinct course codes, sorted.
    pub fn courses(&self) -> Vec<String> {
        self.bundles
            .keys()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Group bundles of a course. Empty for unknown courses.
    pub fn bundles(&self, course: &str) -> &[GroupBundle] {
        self.bundles.get(course).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the catalog holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

//! Generation request.
//!
//! Bundles the course selection, ranking preference and overlap policy into
//! one serializable value, so a caller can build or store it per run.

use serde::{Deserialize, Serialize};

use super::Preference;

/// Generation options.
///
/// Serializable so a front end can keep the current selection as a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Selected course codes, in selection order.
    pub courses: Vec<String>,
    /// Ranking preference.
    #[serde(default)]
    pub preference: Preference,
    /// Keep candidates whose sessions collide.
    #[serde(default)]
    pub allow_overlap: bool,
}

impl GenerateRequest {
    /// Creates a request with no preference and conflict avoidance on.
    pub fn new<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            courses: courses.into_iter().map(Into::into).collect(),
            preference: Preference::NoPreference,
            allow_overlap: false,
        }
    }

    /// Sets the ranking preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    /// Sets the overlap policy.
    pub fn with_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }
}

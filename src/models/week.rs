//! Active-week sets.
//!
//! A session does not necessarily meet every week of the term: labs often
//! alternate, and some meetings only run for the first half. A [`WeekSet`]
//! records the term weeks in which a session actually takes place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Ordered set of term week numbers.
///
/// Serializes as a plain sorted list (`[1, 2, 3]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSet(BTreeSet<u32>);

impl WeekSet {
    /// Creates an empty week set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the set contains a week.
    #[inline]
    pub fn contains(&self, week: u32) -> bool {
        self.0.contains(&week)
    }

    /// Whether two sets share at least one week.
    pub fn intersects(&self, other: &Self) -> bool {
        // Walk the smaller set.
        let (small, large) = if self.0.len() <= other.0.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };
        small.iter().any(|w| large.contains(w))
    }

    /// Number of active weeks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no week is active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates weeks in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Collapses the set into inclusive `(first, last)` runs of consecutive weeks.
    pub fn ranges(&self) -> Vec<(u32, u32)> {
        let mut ranges: Vec<(u32, u32)> = Vec::new();
        for week in self.iter() {
            match ranges.last_mut() {
                Some((_, end)) if *end + 1 == week => *end = week,
                _ => ranges.push((week, week)),
            }
        }
        ranges
    }
}

impl FromIterator<u32> for WeekSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<u32>> for WeekSet {
    fn from(weeks: Vec<u32>) -> Self {
        weeks.into_iter().collect()
    }
}

/// Renders runs as `"1-3, 5, 7-8"`.
impl fmt::Display for WeekSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (start, end)) in self.ranges().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if start == end {
                write!(f, "{start}")?;
            } else {
                write!(f, "{start}-{end}")?;
            }
        }
        Ok(())
    }
}

//! Timetable (candidate solution) model.
//!
//! A timetable holds one group bundle per selected course, concatenated in
//! selection order, plus the preference score it was ranked by. Timetables
//! are built fresh for every candidate and never modified afterwards.

use serde::{Deserialize, Serialize};

use super::{GroupId, Session, Weekday};

/// A complete, scored choice of one group per selected course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Sessions in concatenation order.
    pub sessions: Vec<Session>,
    /// Preference score (higher = better).
    pub score: i64,
}

impl Timetable {
    /// Creates a timetable.
    pub fn new(sessions: Vec<Session>, score: i64) -> Self {
        Self { sessions, score }
    }

    /// Sessions falling on a given day, in timetable order.
    pub fn sessions_on(&self, day: Weekday) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.day == day).collect()
    }

    /// Chosen (course, group) pairs, in selection order.
    pub fn groups(&self) -> Vec<(&str, &GroupId)> {
        let mut groups: Vec<(&str, &GroupId)> = Vec::new();
        for s in &self.sessions {
            let key = (s.course.as_str(), &s.group);
            if !groups.contains(&key) {
                groups.push(key);
            }
        }
        groups
    }

    /// Group chosen for a course.
    pub fn group_for(&self, course: &str) -> Option<&GroupId> {
        self.sessions
            .iter()
            .find(|s| s.course == course)
            .map(|s| &s.group)
    }

    /// Whether any two sessions collide.
    pub fn has_collision(&self) -> bool {
        self.sessions.iter().enumerate().any(|(i, a)| {
            self.sessions[i + 1..]
                .iter()
                .any(|b| a.collides_with(b))
        })
    }

    /// Total weekly hours.
    pub fn total_hours(&self) -> u32 {
        self.sessions.iter().map(|s| s.duration).sum()
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

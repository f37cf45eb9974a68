//! Group bundle model.
//!
//! Enrolling in a group means attending every meeting of that group (its
//! lecture, its lab, its problem class). A bundle is therefore the atomic
//! unit of selection: it enters a timetable whole or not at all.

use serde::{Deserialize, Serialize};

use super::{GroupId, Session};

/// All sessions sharing one (course, group) pair, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBundle {
    /// Course code.
    pub course: String,
    /// Group identifier.
    pub group: GroupId,
    /// Member sessions, catalog order.
    pub sessions: Vec<Session>,
}

impl GroupBundle {
    /// Creates an empty bundle.
    pub fn new(course: impl Into<String>, group: impl Into<GroupId>) -> Self {
        Self {
            course: course.into(),
            group: group.into(),
            sessions: Vec::new(),
        }
    }

    /// Adds a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }

    /// Whether two of the bundle's own sessions collide.
    ///
    /// A self-colliding bundle can never appear in a conflict-free timetable.
    pub fn self_collides(&self) -> bool {
        self.sessions.iter().enumerate().any(|(i, a)| {
            self.sessions[i + 1..]
                .iter()
                .any(|b| a.collides_with(b))
        })
    }

    /// Whether any bundle session collides with any of `existing`.
    pub fn collides_with_any(&self, existing: &[Session]) -> bool {
        existing
            .iter()
            .any(|e| self.sessions.iter().any(|s| e.collides_with(s)))
    }

    /// Total occupied hours across the bundle.
    pub fn total_hours(&self) -> u32 {
        self.sessions.iter().map(|s| s.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SessionKind, Weekday};

    fn bundle(group: &str) -> GroupBundle {
        GroupBundle::new("EA", group)
            .with_session(Session::new("EA", group, Weekday::Monday, 8, 2).with_weeks(1..=13))
            .with_session(
                Session::new("EA", group, Weekday::Wednesday, 15, 2)
                    .with_kind(SessionKind::Lab)
                    .with_weeks([1, 3, 5]),
            )
    }

    #[test]
    fn test_bundle_hours() {
        assert_eq!(bundle("10").total_hours(), 4);
    }

    #[test]
    fn test_self_collision() {
        assert!(!bundle("10").self_collides());

        let clashing = bundle("10").with_session(
            Session::new("EA", "10", Weekday::Monday, 9, 1)
                .with_kind(SessionKind::Problems)
                .with_weeks([2]),
        );
        assert!(clashing.self_collides());
    }

    #[test]
    fn test_single_session_never_self_collides() {
        let b = GroupBundle::new("EA", "1")
            .with_session(Session::new("EA", "1", Weekday::Friday, 12, 2).with_weeks([1]));
        assert!(!b.self_collides());
        assert!(!GroupBundle::new("EA", "2").self_collides());
    }

    #[test]
    fn test_collides_with_existing() {
        let b = bundle("10");
        let free = vec![Session::new("FO", "1", Weekday::Monday, 10, 2).with_weeks(1..=13)];
        let busy = vec![Session::new("FO", "1", Weekday::Wednesday, 16, 1).with_weeks([5])];
        assert!(!b.collides_with_any(&free));
        assert!(b.collides_with_any(&busy));
        assert!(!b.collides_with_any(&[]));
    }
}

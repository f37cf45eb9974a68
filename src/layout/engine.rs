//! Two-phase greedy overlap layout.
//!
//! # Algorithm
//!
//! Input is stable-sorted by start hour (ties keep input order).
//!
//! 1. **Clustering.** Each session joins the first cluster holding at least
//!    one member it shares an hour with, else opens a new cluster. Because
//!    membership only needs overlap with ANY member, a cluster can chain
//!    sessions that do not overlap each other (8-10 and 10-12 both joined
//!    through 9-11). This is kept as is: it widens some clusters but never
//!    puts two overlapping sessions in one column.
//! 2. **Columns.** Within a cluster, each session takes the first column
//!    whose members it shares no hour with, else opens a new column. On
//!    start-sorted input this is greedy interval colouring and uses the
//!    minimum number of columns.
//!
//! Every session of a cluster reports that cluster's column count.
//!
//! # Complexity
//! O(n² · h) for n sessions of at most h hours each.

use tracing::trace;

use super::{DayLayout, Placement, WeekLayout};
use crate::models::{Session, Timetable, Weekday};

type Entry<'a> = (usize, &'a Session);

/// Computes non-overlapping column layouts for one day of sessions.
///
/// Only hours are compared: callers pass the sessions of a single day
/// (see [`LayoutEngine::layout_week`]). Active weeks are ignored, so
/// alternating-week sessions sharing a slot still get separate columns.
///
/// # Example
///
/// ```
/// use u_timetable::layout::LayoutEngine;
/// use u_timetable::models::{Session, Weekday};
///
/// let sessions = vec![
///     Session::new("EA", "10", Weekday::Monday, 9, 1),
///     Session::new("FO", "1", Weekday::Monday, 9, 1),
///     Session::new("MA", "2", Weekday::Monday, 10, 1),
/// ];
/// let day = LayoutEngine::new().layout(&sessions);
///
/// assert_eq!(day.cluster_count, 2);
/// assert_eq!(day.placements[1].column, 1);
/// assert_eq!(day.placements[2].total_columns, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    first_hour: u32,
}

impl LayoutEngine {
    /// Creates an engine whose grid starts at hour 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hour mapped to grid row 0.
    pub fn with_first_hour(mut self, first_hour: u32) -> Self {
        self.first_hour = first_hour;
        self
    }

    /// Lays out one day of sessions.
    pub fn layout<'a, I>(&self, sessions: I) -> DayLayout<'a>
    where
        I: IntoIterator<Item = &'a Session>,
    {
        let mut ordered: Vec<Entry<'a>> = sessions.into_iter().enumerate().collect();
        // Zero-length sessions sort last.
        ordered.sort_by_key(|(_, s)| (s.start_hour().is_none(), s.start_hour()));

        let clusters = cluster(ordered);
        let mut placements = Vec::new();
        for (cluster_index, members) in clusters.iter().enumerate() {
            let columns = assign_columns(members);
            let total_columns = columns.iter().copied().max().map_or(1, |c| c + 1);
            trace!(cluster = cluster_index, sessions = members.len(), total_columns, "cluster laid out");

            placements.extend(members.iter().zip(columns).map(|(&(index, session), column)| {
                Placement {
                    session,
                    index,
                    cluster: cluster_index,
                    column,
                    total_columns,
                    row_start: session
                        .start_hour()
                        .map_or(0, |h| h.saturating_sub(self.first_hour)),
                    row_span: session.duration,
                }
            }));
        }

        DayLayout {
            placements,
            cluster_count: clusters.len(),
        }
    }

    /// Lays out every weekday of a timetable.
    pub fn layout_week<'a>(&self, timetable: &'a Timetable) -> WeekLayout<'a> {
        WeekLayout {
            days: Weekday::ALL
                .iter()
                .map(|&day| (day, self.layout(timetable.sessions_on(day))))
                .collect(),
        }
    }
}

/// Phase 1: first cluster with any hour-sharing member.
fn cluster(ordered: Vec<Entry<'_>>) -> Vec<Vec<Entry<'_>>> {
    let mut clusters: Vec<Vec<Entry<'_>>> = Vec::new();
    for entry in ordered {
        let home = clusters
            .iter_mut()
            .find(|members| members.iter().any(|(_, m)| m.shares_hour(entry.1)));
        match home {
            Some(members) => members.push(entry),
            None => clusters.push(vec![entry]),
        }
    }
    clusters
}

/// Phase 2: first column free of hour overlap. Returns one column per member.
fn assign_columns(members: &[Entry<'_>]) -> Vec<usize> {
    let mut columns: Vec<Vec<&Session>> = Vec::new();
    members
        .iter()
        .map(|&(_, session)| {
            match columns
                .iter()
                .position(|col| !col.iter().any(|m| m.shares_hour(session)))
            {
                Some(c) => {
                    columns[c].push(session);
                    c
                }
                None => {
                    columns.push(vec![session]);
                    columns.len() - 1
                }
            }
        })
        .collect()
}

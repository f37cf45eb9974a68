use serde::Serialize;

use crate::models::{Session, Weekday};

/// Grid placement of one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement<'a> {
    /// The placed session.
    pub session: &'a Session,
    /// Position of the session in the input.
    pub index: usize,
    /// Cluster the session belongs to.
    pub cluster: usize,
    /// Column within the cluster (0-based).
    pub column: usize,
    /// Column count of the cluster (>= 1).
    pub total_columns: usize,
    /// First grid row: start hour minus the grid's first hour.
    pub row_start: u32,
    /// Rows spanned: the duration in hours.
    pub row_span: u32,
}

impl Placement<'_> {
    /// Block width as a percentage of the day column.
    pub fn width_percent(&self) -> f64 {
        100.0 / self.total_columns as f64
    }

    /// Left offset as a percentage of the day column.
    pub fn left_percent(&self) -> f64 {
        self.column as f64 * self.width_percent()
    }
}

/// Placements for one day, grouped cluster by cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayLayout<'a> {
    /// Placements, cluster order then start order within a cluster.
    pub placements: Vec<Placement<'a>>,
    /// Number of clusters.
    pub cluster_count: usize,
}

impl<'a> DayLayout<'a> {
    /// Placement of the session at a given input position.
    pub fn placement_for(&self, index: usize) -> Option<&Placement<'a>> {
        self.placements.iter().find(|p| p.index == index)
    }

    /// Placements of one cluster.
    pub fn cluster(&self, cluster: usize) -> Vec<&Placement<'a>> {
        self.placements
            .iter()
            .filter(|p| p.cluster == cluster)
            .collect()
    }

    /// Widest cluster's column count (0 for an empty day).
    pub fn max_columns(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.total_columns)
            .max()
            .unwrap_or(0)
    }

    /// Whether nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Day layouts for a whole timetable, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout<'a> {
    /// One entry per weekday, in [`Weekday::ALL`] order.
    pub days: Vec<(Weekday, DayLayout<'a>)>,
}

impl<'a> WeekLayout<'a> {
    /// Layout of one day.
    pub fn day(&self, day: Weekday) -> Option<&DayLayout<'a>> {
        self.days.iter().find(|(d, _)| *d == day).map(|(_, l)| l)
    }
}

//! Overlap layout for rendering a timetable day.
//!
//! Converts a day's possibly overlapping sessions into a 2D placement:
//! rows from the start hour and duration, and a column index plus column
//! count so that no two hour-overlapping sessions share a column.
//!
//! Mapping columns to pixels (`width = 100 / total_columns`,
//! `left = column * width`) is left to the renderer; [`Placement`] offers
//! the percentages as a convenience.

mod engine;
mod placement;

pub use engine::LayoutEngine;
pub use placement::{DayLayout, Placement, WeekLayout};

//! Conflict-aware weekly class timetables for the U-Engine ecosystem.
//!
//! Given a catalog of course meetings and a list of chosen courses, this
//! crate enumerates every way to pick one enrollment group per course,
//! rejects (or tolerates) time conflicts, ranks the candidates by a
//! time-of-day preference, and lays out a chosen timetable's days without
//! overlapping blocks.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Session`, `GroupBundle`, `Timetable`,
//!   `CatalogSession`, `WeekSet`, `Weekday`
//! - **`catalog`**: Read-only `Catalog` built once from raw records or JSON
//! - **`validation`**: Input integrity checks on raw records
//! - **`generator`**: `ScheduleGenerator` — group enumeration, conflict
//!   pruning, preference scoring, deterministic ordering
//! - **`layout`**: `LayoutEngine` — cluster and column assignment for one day
//!
//! # Flow
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::generator::{Preference, ScheduleGenerator};
//! use u_timetable::layout::LayoutEngine;
//! use u_timetable::models::{Session, Weekday};
//!
//! let catalog = Catalog::from_sessions(vec![
//!     Session::new("EA", "10", Weekday::Monday, 8, 2).with_weeks(1..=13),
//!     Session::new("FO", "1", Weekday::Monday, 10, 2).with_weeks(1..=13),
//! ]);
//! let generator = ScheduleGenerator::new(catalog);
//! let timetables = generator.generate(&["EA", "FO"], Preference::EarlyPreferred, false);
//!
//! let week = LayoutEngine::new().with_first_hour(8).layout_week(&timetables[0]);
//! assert_eq!(week.day(Weekday::Monday).unwrap().cluster_count, 2);
//! ```
//!
//! Everything is synchronous and pure: each call recomputes from scratch
//! over immutable inputs.

pub mod catalog;
pub mod generator;
pub mod layout;
pub mod models;
pub mod validation;

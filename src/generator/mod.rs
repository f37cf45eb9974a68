//! Timetable generation and ranking.
//!
//! Enumerates every choice of one group per selected course, filters out
//! choices with colliding sessions (unless overlaps are allowed), scores
//! the rest by a time-of-day preference and sorts them best first.
//!
//! # Usage
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::generator::{GenerateRequest, Preference, ScheduleGenerator};
//!
//! let generator = ScheduleGenerator::new(Catalog::default());
//! let request = GenerateRequest::new(["EA", "FO"]).with_preference(Preference::LatePreferred);
//! assert!(generator.generate_request(&request).is_empty());
//! ```

mod combinations;
mod preference;
mod request;

pub use combinations::ScheduleGenerator;
pub use preference::{Preference, AFTERNOON_START, MORNING_PIVOT};
pub use request::GenerateRequest;

//! Timetable domain models.
//!
//! Provides the data types shared by the generator and the layout engine.
//! Raw catalog records are projected once into immutable [`Session`]s;
//! everything downstream works on those.
//!
//! # Domain Mappings
//!
//! | u-timetable | Catalog field | Meaning |
//! |-------------|---------------|---------|
//! | Course | `codi_assig` | Academic subject code |
//! | GroupId | `grup` | Enrollment option of a course |
//! | Session | one record | Weekly meeting (day + hours + weeks) |
//! | GroupBundle | (course, group) | Meetings selected together |
//! | Timetable | — | One group per chosen course, scored |

mod bundle;
mod record;
mod session;
mod timetable;
mod week;

pub use bundle::GroupBundle;
pub use record::CatalogSession;
pub use session::{GroupId, Session, SessionKind, Weekday};
pub use timetable::Timetable;
pub use week::WeekSet;

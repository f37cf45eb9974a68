//! Time-of-day preference scoring.
//!
//! A timetable is scored by summing a per-hour contribution over every
//! occupied hour of every session it contains.
//!
//! | Preference | Hour `h < 14` | Hour `h >= 14` |
//! |------------|---------------|----------------|
//! | EarlyPreferred | `22 - h` | 0 |
//! | LatePreferred | 0 | `h` |
//! | NoPreference | 0 | 0 |
//!
//! Earlier morning hours weigh more under `EarlyPreferred`, later afternoon
//! hours weigh more under `LatePreferred`.

use serde::{Deserialize, Serialize};

use crate::models::Session;

/// First hour counted as afternoon.
pub const AFTERNOON_START: u32 = 14;

/// Pivot for morning weights: hour `h` contributes `MORNING_PIVOT - h`.
pub const MORNING_PIVOT: u32 = 22;

/// Student preference for when classes happen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preference {
    /// Favor morning sessions.
    EarlyPreferred,
    /// Favor afternoon sessions.
    LatePreferred,
    /// No ranking; results keep generation order.
    #[default]
    NoPreference,
}

impl Preference {
    /// Contribution of a single occupied hour.
    #[inline]
    pub fn hour_score(self, hour: u32) -> i64 {
        match self {
            Self::EarlyPreferred if hour < AFTERNOON_START => i64::from(MORNING_PIVOT - hour),
            Self::LatePreferred if hour >= AFTERNOON_START => i64::from(hour),
            _ => 0,
        }
    }

    /// Score of a session list.
    pub fn score(self, sessions: &[Session]) -> i64 {
        if self == Self::NoPreference {
            return 0;
        }
        sessions
            .iter()
            .flat_map(|s| s.hours.iter())
            .map(|&h| self.hour_score(h))
            .sum()
    }
}

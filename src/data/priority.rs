//! Priority derived from how close a ticket's due date is.

use chrono::{DateTime, Utc};
use std::fmt;

/// Minutes-until-due at or below which a ticket is `High`.
pub const HIGH_THRESHOLD_MINUTES: f64 = 2.0;
/// Minutes-until-due at or below which a ticket is `Medium`.
pub const MEDIUM_THRESHOLD_MINUTES: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Compute the priority for a due date as of `now`.
    ///
    /// Overdue tickets have negative minutes left and land in `High`.
    /// A missing or unparseable due date is `Low`.
    pub fn from_due(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let Some(due) = due else {
            return Priority::Low;
        };

        let minutes = minutes_until(due, now);
        if minutes <= HIGH_THRESHOLD_MINUTES {
            Priority::High
        } else if minutes <= MEDIUM_THRESHOLD_MINUTES {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fractional minutes from `now` until `due` (negative when overdue).
pub fn minutes_until(due: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (due - now).num_milliseconds() as f64 / 60_000.0
}

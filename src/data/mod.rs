pub mod filters;
pub mod pagination;
pub mod priority;
pub mod query;
pub mod rows;

pub use filters::{FilterField, FilterSelector, FilterState, ListFilters};
pub use pagination::PaginationState;
pub use priority::Priority;
pub use query::TicketQuery;
pub use rows::{build_rows, format_due, TicketRow, INVALID_DATE};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticket identifier as handed out by the backend.
///
/// json-server assigns numeric ids to seeded records and string ids to
/// records it creates itself, so both shapes are accepted and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TicketId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketId::Number(n) => write!(f, "{}", n),
            TicketId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TicketId {
    fn from(n: i64) -> Self {
        TicketId::Number(n)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        TicketId::Text(s.to_string())
    }
}

/// Due date in whatever shape the backend stored it.
///
/// The raw value is kept so a PUT writes back exactly what was read; it is
/// only interpreted when a row is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DueDate {
    /// Epoch milliseconds
    Millis(i64),
    Text(String),
    /// Anything else (floats, objects, ...). Never parses.
    Other(serde_json::Value),
}

impl DueDate {
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        match self {
            DueDate::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            DueDate::Text(s) => parse_due_text(s),
            DueDate::Other(_) => None,
        }
    }
}

/// Local date-time layouts accepted in addition to RFC 3339.
/// The first two are what a `datetime-local` style input produces.
const LOCAL_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a textual due date.
///
/// - RFC 3339 (`2024-05-01T10:00:00Z`, `...+02:00`) is taken as-is
/// - a date-time without offset is interpreted in local time
/// - a bare date is UTC midnight
///
/// Anything else yields `None`.
pub fn parse_due_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A ticket record as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
    /// Fields this client does not know about; sent back on update.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Ticket {
    /// Parsed due date, `None` when missing or malformed.
    pub fn due(&self) -> Option<DateTime<Utc>> {
        self.due_date.as_ref().and_then(DueDate::parse)
    }
}

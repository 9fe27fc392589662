//! Table rows built from a fetched ticket page.

use super::priority::Priority;
use super::{Ticket, TicketId};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// Shown in place of a due date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// One rendered ticket. Rows are rebuilt from scratch on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRow {
    /// Target of the row's edit / delete actions
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub due: String,
    pub priority: Priority,
}

/// Build rows in input order, computing each priority against `now`.
pub fn build_rows(tickets: &[Ticket], now: DateTime<Utc>, date_format: &str) -> Vec<TicketRow> {
    tickets
        .iter()
        .map(|ticket| {
            let due = ticket.due();
            TicketRow {
                id: ticket.id.clone(),
                title: ticket.title.clone(),
                description: ticket.description.clone(),
                status: ticket.status.clone(),
                due: format_due(due, date_format),
                priority: Priority::from_due(due, now),
            }
        })
        .collect()
}

/// Format a due date in local time.
pub fn format_due(due: Option<DateTime<Utc>>, date_format: &str) -> String {
    let Some(due) = due else {
        return INVALID_DATE.to_string();
    };

    let local = due.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(date_format)).is_err() {
        // Bad format strings are rejected at config load; fall back anyway.
        return local.to_rfc3339();
    }
    out
}

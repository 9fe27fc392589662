//! Decoding backend records.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use ticketdesk::data::{parse_due_text, DueDate, Ticket, TicketId};

#[test]
fn test_full_record() {
    let ticket: Ticket = serde_json::from_value(json!({
        "id": 1,
        "title": "VPN down",
        "description": "Office VPN unreachable",
        "status": "open",
        "dueDate": "2024-03-01T08:00:00Z"
    }))
    .unwrap();

    assert_eq!(ticket.id, TicketId::Number(1));
    assert_eq!(ticket.title, "VPN down");
    assert_eq!(
        ticket.due(),
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap())
    );
    assert!(ticket.extra.is_empty());
}

#[test]
fn test_missing_fields_default() {
    let ticket: Ticket = serde_json::from_value(json!({ "id": "x9" })).unwrap();

    assert_eq!(ticket.id, TicketId::Text("x9".to_string()));
    assert_eq!(ticket.title, "");
    assert_eq!(ticket.status, "");
    assert_eq!(ticket.due_date, None);
    assert_eq!(ticket.due(), None);
}

#[test]
fn test_epoch_millis_due_date() {
    let ticket: Ticket =
        serde_json::from_value(json!({ "id": 2, "dueDate": 1_700_000_000_000i64 })).unwrap();

    assert_eq!(ticket.due_date, Some(DueDate::Millis(1_700_000_000_000)));
    assert_eq!(
        ticket.due().map(|d| d.timestamp()),
        Some(1_700_000_000)
    );
}

#[test]
fn test_odd_due_date_shapes_do_not_fail_decoding() {
    let ticket: Ticket =
        serde_json::from_value(json!({ "id": 3, "dueDate": { "when": "soon" } })).unwrap();
    assert!(matches!(ticket.due_date, Some(DueDate::Other(_))));
    assert_eq!(ticket.due(), None);

    let ticket: Ticket = serde_json::from_value(json!({ "id": 4, "dueDate": "" })).unwrap();
    assert_eq!(ticket.due(), None);
}

#[test]
fn test_unknown_fields_survive_round_trip() {
    let raw = json!({
        "id": 5,
        "title": "t",
        "description": "d",
        "status": "closed",
        "dueDate": "2024-01-01",
        "assignee": { "name": "Sam" },
        "watchers": 3
    });
    let ticket: Ticket = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(serde_json::to_value(&ticket).unwrap(), raw);
}

#[test]
fn test_date_only_is_utc_midnight() {
    assert_eq!(
        parse_due_text("2024-01-01"),
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_offset_is_respected() {
    assert_eq!(
        parse_due_text("2024-01-01T10:00:00+02:00"),
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap())
    );
}

#[test]
fn test_local_form_value_parses() {
    assert!(parse_due_text("2024-01-01T10:00").is_some());
    assert!(parse_due_text("2024-01-01 10:00:00").is_some());
    assert_eq!(parse_due_text("01/02/2024"), None);
}

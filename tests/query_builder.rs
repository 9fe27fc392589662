//! List query construction.

mod test_utils;

use pretty_assertions::assert_eq;
use test_utils::{make_app, test_config, FakeTicketApi};
use ticketdesk::data::{ListFilters, TicketQuery};

#[test]
fn test_unfiltered_query() {
    assert_eq!(TicketQuery::new(1, 5).to_query_string(), "_page=1&_limit=5");
}

#[test]
fn test_status_only() {
    let query = TicketQuery::new(2, 5).with_filters(&ListFilters::from_values("open", ""));
    assert_eq!(query.to_query_string(), "_page=2&_limit=5&status=open");
}

#[test]
fn test_priority_only() {
    let query = TicketQuery::new(1, 5).with_filters(&ListFilters::from_values("", "Low"));
    assert_eq!(query.to_query_string(), "_page=1&_limit=5&priority=Low");
}

#[test]
fn test_both_filters_are_encoded() {
    let query =
        TicketQuery::new(4, 20).with_filters(&ListFilters::from_values("on hold", "High"));
    assert_eq!(
        query.to_query_string(),
        "_page=4&_limit=20&status=on%20hold&priority=High"
    );
}

#[test]
fn test_values_are_not_validated() {
    let query = TicketQuery::new(1, 5).with_filters(&ListFilters::from_values("whatever", "Urgent"));
    assert_eq!(
        query.to_query_string(),
        "_page=1&_limit=5&status=whatever&priority=Urgent"
    );
}

#[tokio::test]
async fn test_app_query_uses_page_and_size() {
    let api = FakeTicketApi::with_tickets(vec![]);
    let mut config = test_config();
    config.pagination.page_size = 12;
    let mut app = make_app(config, &api);
    app.pagination = app.pagination.navigate(3);

    assert_eq!(app.list_query(false), TicketQuery::new(3, 12));
}

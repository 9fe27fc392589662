//! Page navigation through the app update loop.

mod test_utils;

use test_utils::{make_app, make_ticket, settle, test_config, FakeTicketApi};
use ticketdesk::data::{PaginationState, TicketQuery};
use ticketdesk::tui::Message;

mod state {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_page_has_no_previous() {
        let state = PaginationState::default();
        assert_eq!(state.page(), 1);
        assert!(!state.has_previous());
        assert_eq!(state.previous(), None);
    }

    #[test]
    fn test_next_is_unbounded() {
        let state = PaginationState::default().navigate(999).next();
        assert_eq!(state.page(), 1000);
    }

    #[test]
    fn test_navigate_clamps_to_one() {
        assert_eq!(PaginationState::default().navigate(0).page(), 1);
    }
}

mod navigation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_next_page_fetches_page_two() {
        let api = FakeTicketApi::with_tickets(vec![make_ticket(6, "Sixth", None)]);
        let mut app = make_app(test_config(), &api);

        assert!(!app.update(Message::NextPage));
        settle(&mut app).await;

        assert_eq!(app.pagination.page(), 2);
        assert_eq!(api.list_calls(), vec![TicketQuery::new(2, 5)]);
        assert_eq!(app.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_previous_on_first_page_does_nothing() {
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut app = make_app(test_config(), &api);

        app.update(Message::PrevPage);

        assert!(!app.is_loading());
        assert!(api.calls().is_empty());
        assert_eq!(app.pagination.page(), 1);
    }

    #[tokio::test]
    async fn test_previous_from_page_three() {
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut app = make_app(test_config(), &api);
        app.pagination = app.pagination.navigate(3);

        app.update(Message::PrevPage);
        settle(&mut app).await;

        assert_eq!(app.pagination.page(), 2);
        assert_eq!(api.list_calls(), vec![TicketQuery::new(2, 5)]);
    }

    #[tokio::test]
    async fn test_empty_page_past_the_end() {
        // The backend returns nothing; the page number still advances.
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut app = make_app(test_config(), &api);

        app.update(Message::GoToPage(50));
        settle(&mut app).await;

        assert_eq!(app.pagination.page(), 50);
        assert!(app.rows.is_empty());
        assert!(app.selected_row().is_none());
    }

    #[tokio::test]
    async fn test_refresh_keeps_page() {
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut app = make_app(test_config(), &api);
        app.pagination = app.pagination.navigate(4);

        app.update(Message::Refresh);
        settle(&mut app).await;

        assert_eq!(api.list_calls(), vec![TicketQuery::new(4, 5)]);
    }
}

//! Status / priority filters and how they reach the list query.

mod test_utils;

use test_utils::{make_app, settle, test_config, FakeTicketApi};
use ticketdesk::data::{FilterField, ListFilters, TicketQuery};
use ticketdesk::tui::{Message, ModalState};

fn filtered(page: u32, status: Option<&str>, priority: Option<&str>) -> TicketQuery {
    TicketQuery {
        page,
        limit: 5,
        status: status.map(str::to_string),
        priority: priority.map(str::to_string),
    }
}

mod selectors {
    use super::*;
    use pretty_assertions::assert_eq;
    use ticketdesk::data::FilterState;

    fn state() -> FilterState {
        FilterState::new(vec!["open".into(), "closed".into()])
    }

    #[test]
    fn test_defaults_to_all() {
        assert_eq!(state().values(), ListFilters::default());
    }

    #[test]
    fn test_cycles_back_to_all() {
        let mut s = state();
        s.status.select_next();
        assert_eq!(s.status.value(), Some("open"));
        s.status.select_next();
        assert_eq!(s.status.value(), Some("closed"));
        s.status.select_next();
        assert_eq!(s.status.value(), None);
    }

    #[test]
    fn test_priority_options_are_labels() {
        let mut s = state();
        s.focus = FilterField::Priority;
        s.focused_mut().select_prev();
        assert_eq!(s.values(), ListFilters::from_values("", "Low"));
    }
}

mod app {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_filter_change_keeps_page_and_sends_status() {
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut app = make_app(test_config(), &api);
        app.pagination = app.pagination.navigate(2);

        app.update(Message::ToggleFilterMenu);
        assert_eq!(app.modal, ModalState::FilterMenu);
        app.update(Message::FilterNextValue);
        settle(&mut app).await;

        assert_eq!(api.list_calls(), vec![filtered(2, Some("open"), None)]);
        assert_eq!(app.pagination.page(), 2);
    }

    #[tokio::test]
    async fn test_both_filters() {
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut app = make_app(test_config(), &api);

        app.update(Message::FilterNextValue);
        app.update(Message::FilterSwitchField);
        app.update(Message::FilterNextValue);
        settle(&mut app).await;

        assert!(api
            .list_calls()
            .contains(&filtered(1, Some("open"), Some("High"))));
    }

    #[tokio::test]
    async fn test_clear_filters_fetches_unfiltered() {
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut app = make_app(test_config(), &api);
        app.update(Message::FilterNextValue);
        settle(&mut app).await;
        api.clear_calls();

        app.update(Message::ClearFilters);
        settle(&mut app).await;

        assert_eq!(api.list_calls(), vec![TicketQuery::new(1, 5)]);
        assert_eq!(app.filters.values(), ListFilters::default());
    }

    #[tokio::test]
    async fn test_navigation_drops_filters_by_default() {
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut app = make_app(test_config(), &api);
        app.update(Message::FilterNextValue);
        settle(&mut app).await;
        api.clear_calls();

        app.update(Message::NextPage);
        settle(&mut app).await;

        assert_eq!(api.list_calls(), vec![TicketQuery::new(2, 5)]);
        // The selector itself still shows the filter
        assert_eq!(app.filters.status.value(), Some("open"));
    }

    #[tokio::test]
    async fn test_sticky_filters_apply_to_navigation() {
        let api = FakeTicketApi::with_tickets(vec![]);
        let mut config = test_config();
        config.pagination.sticky_filters = true;
        let mut app = make_app(config, &api);
        app.update(Message::FilterNextValue);
        settle(&mut app).await;
        api.clear_calls();

        app.update(Message::NextPage);
        app.update(Message::Refresh);
        settle(&mut app).await;

        assert_eq!(
            api.list_calls(),
            vec![filtered(2, Some("open"), None), filtered(2, Some("open"), None)]
        );
    }
}

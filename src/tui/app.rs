use super::edit::EditSession;
use crate::config::Config;
use crate::data::{build_rows, FilterState, PaginationState, Ticket, TicketId, TicketQuery, TicketRow};
use crate::integrations::{ApiError, TicketApi};
use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Braille spinner frames for loading animation
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Alert shown when the ticket to edit cannot be fetched
pub const LOAD_EDIT_FAILED: &str = "Failed to load ticket for editing.";
/// Alert shown when the backend rejects an update
pub const UPDATE_FAILED: &str = "Failed to update the ticket.";

/// Outcome of a background backend call, delivered back to the UI loop.
#[derive(Debug)]
pub enum ApiEvent {
    TicketsLoaded(Result<Vec<Ticket>, ApiError>),
    TicketForEdit(Result<Ticket, ApiError>),
    TicketUpdated {
        id: TicketId,
        result: Result<(), ApiError>,
    },
    TicketDeleted {
        id: TicketId,
        result: Result<(), ApiError>,
    },
}

/// Column indices
pub const COL_IDX_TITLE: usize = 0;
pub const COL_IDX_DESCRIPTION: usize = 1;
pub const COL_IDX_STATUS: usize = 2;
pub const COL_IDX_DUE: usize = 3;
pub const COL_IDX_PRIORITY: usize = 4;
pub const COL_IDX_ACTIONS: usize = 5;
pub const NUM_COLUMNS: usize = 6;

pub const COLUMN_NAMES: [&str; NUM_COLUMNS] = [
    "Title", "Description", "Status", "Due Date", "Priority", "Actions",
];

/// Active modal - only one can be open at a time. The alert is tracked
/// separately because it stacks on top of the edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    Help,
    FilterMenu,
    Edit,
}

impl ModalState {
    pub fn is_none(&self) -> bool {
        matches!(self, ModalState::None)
    }
}

pub struct App {
    pub config: Arc<Config>,
    api: Arc<dyn TicketApi>,

    // Table state, rebuilt on every successful list fetch
    pub rows: Vec<TicketRow>,
    pub selected: usize,
    pub column_widths: [usize; NUM_COLUMNS],
    pub last_refresh: Option<DateTime<Utc>>,

    pub pagination: PaginationState,
    pub filters: FilterState,

    pub modal: ModalState,
    pub edit: Option<EditSession>,
    /// Blocking alert; swallows all input until dismissed
    pub alert: Option<String>,

    /// Requests spawned but not yet answered (spinner only)
    pub in_flight: usize,
    pub spinner_frame: usize,

    events_tx: mpsc::Sender<ApiEvent>,
    events_rx: mpsc::Receiver<ApiEvent>,
}

// Modal state accessors
impl App {
    pub fn show_help(&self) -> bool {
        matches!(self.modal, ModalState::Help)
    }

    pub fn show_filter_menu(&self) -> bool {
        matches!(self.modal, ModalState::FilterMenu)
    }

    pub fn show_edit_modal(&self) -> bool {
        matches!(self.modal, ModalState::Edit) && self.edit.is_some()
    }

    pub fn show_alert(&self) -> bool {
        self.alert.is_some()
    }
}

impl App {
    pub fn new(config: Config, api: Arc<dyn TicketApi>) -> Self {
        let (events_tx, events_rx) = mpsc::channel(100);
        let filters = FilterState::new(config.filters.statuses.clone());
        Self {
            config: Arc::new(config),
            api,
            rows: Vec::new(),
            selected: 0,
            // Title, Description, Status, Due, Priority, Actions
            column_widths: [24, 32, 12, 19, 8, 9],
            last_refresh: None,
            pagination: PaginationState::default(),
            filters,
            modal: ModalState::None,
            edit: None,
            alert: None,
            in_flight: 0,
            spinner_frame: 0,
            events_tx,
            events_rx,
        }
    }

    /// Process a message and update app state (Elm Architecture update function).
    ///
    /// Returns `true` if the app should quit.
    pub fn update(&mut self, msg: super::Message) -> bool {
        use super::Message;
        match msg {
            Message::Quit => return true,
            Message::Refresh => self.fetch_tickets(),

            Message::MoveUp => self.move_selection(-1),
            Message::MoveDown => self.move_selection(1),
            Message::GotoTop => self.selected = 0,
            Message::GotoBottom => self.selected = self.rows.len().saturating_sub(1),

            Message::NextPage => self.go_to_page(self.pagination.next().page()),
            Message::PrevPage => {
                if let Some(prev) = self.pagination.previous() {
                    self.go_to_page(prev.page());
                }
            }
            Message::GoToPage(page) => self.go_to_page(page),

            Message::EditTicket(id) => self.edit_ticket(id),
            Message::DeleteTicket(id) => self.delete_ticket(id),

            Message::ToggleHelp => self.toggle_modal(ModalState::Help),
            Message::ToggleFilterMenu => self.toggle_modal(ModalState::FilterMenu),
            Message::CloseModal => self.close_modal(),

            Message::FilterSwitchField => self.filters.focus = self.filters.focus.toggle(),
            Message::FilterNextValue => {
                self.filters.focused_mut().select_next();
                self.apply_filters();
            }
            Message::FilterPrevValue => {
                self.filters.focused_mut().select_prev();
                self.apply_filters();
            }
            Message::ClearFilters => {
                self.filters.clear();
                self.apply_filters();
            }

            Message::EditFocusNext => self.with_edit(EditSession::focus_next),
            Message::EditFocusPrev => self.with_edit(EditSession::focus_prev),
            Message::EditInput(c) => self.with_edit(|s| s.input(c)),
            Message::EditBackspace => self.with_edit(EditSession::backspace),
            Message::EditCycleStatus(forward) => {
                let config = Arc::clone(&self.config);
                self.with_edit(|s| s.cycle_status(&config.filters.statuses, forward));
            }
            Message::SubmitEdit => self.submit_edit(),

            Message::DismissAlert => self.alert = None,

            Message::None => {}
        }
        false
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Requests
    // ─────────────────────────────────────────────────────────────────────────

    /// Query for the current page; filters only when asked for or when
    /// configured to stick.
    pub fn list_query(&self, with_filters: bool) -> TicketQuery {
        let query = TicketQuery::new(self.pagination.page(), self.config.pagination.page_size);
        if with_filters || self.config.pagination.sticky_filters {
            query.with_filters(&self.filters.values())
        } else {
            query
        }
    }

    /// Fetch the current page with the default query.
    pub fn fetch_tickets(&mut self) {
        let query = self.list_query(false);
        self.spawn_list(query);
    }

    /// Fetch the current page with the selectors applied. The page is kept.
    pub fn apply_filters(&mut self) {
        let query = self.list_query(true);
        self.spawn_list(query);
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.pagination = self.pagination.navigate(page);
        self.fetch_tickets();
    }

    fn spawn_list(&mut self, query: TicketQuery) {
        tracing::debug!("Fetching tickets: {}", query.to_query_string());
        self.spawn_request(move |api| async move { ApiEvent::TicketsLoaded(api.list(&query).await) });
    }

    pub fn edit_ticket(&mut self, id: TicketId) {
        self.spawn_request(move |api| async move { ApiEvent::TicketForEdit(api.get(&id).await) });
    }

    pub fn submit_edit(&mut self) {
        let Some(session) = self.edit.as_mut() else {
            return;
        };
        session.submitting = true;
        let ticket = session.merged_ticket();
        self.spawn_request(move |api| async move {
            let result = api.update(&ticket).await;
            ApiEvent::TicketUpdated {
                id: ticket.id,
                result,
            }
        });
    }

    pub fn delete_ticket(&mut self, id: TicketId) {
        self.spawn_request(move |api| async move {
            let result = api.delete(&id).await;
            ApiEvent::TicketDeleted { id, result }
        });
    }

    /// Run a backend call in the background; its event arrives via
    /// [`poll_events`](Self::poll_events). Nothing is cancelled or ordered:
    /// events are applied as they arrive.
    fn spawn_request<F, Fut>(&mut self, request: F)
    where
        F: FnOnce(Arc<dyn TicketApi>) -> Fut,
        Fut: Future<Output = ApiEvent> + Send + 'static,
    {
        self.in_flight += 1;
        let fut = request(Arc::clone(&self.api));
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = fut.await;
            if let Err(e) = tx.send(event).await {
                tracing::warn!("Failed to deliver API result: {}", e);
            }
        });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply every event that has already arrived (non-blocking, call from
    /// the event loop tick). Returns whether anything was applied.
    pub fn poll_events(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
            applied = true;
        }
        applied
    }

    /// Wait for the next event and apply it.
    pub async fn next_event(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    pub fn apply_event(&mut self, event: ApiEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match event {
            ApiEvent::TicketsLoaded(Ok(tickets)) => self.render_tickets(&tickets, Utc::now()),
            ApiEvent::TicketsLoaded(Err(e)) => {
                // Table stays as it was
                tracing::error!("Error fetching tickets: {}", e);
            }

            ApiEvent::TicketForEdit(Ok(ticket)) => {
                let id = ticket.id.clone();
                match EditSession::open(ticket) {
                    Some(session) => {
                        tracing::debug!("Editing ticket {}", id);
                        self.edit = Some(session);
                        self.modal = ModalState::Edit;
                    }
                    None => {
                        tracing::error!("Ticket {} has no usable due date, not editing", id);
                        self.alert = Some(LOAD_EDIT_FAILED.to_string());
                    }
                }
            }
            ApiEvent::TicketForEdit(Err(e)) => {
                tracing::error!("Error fetching ticket: {}", e);
                self.alert = Some(LOAD_EDIT_FAILED.to_string());
            }

            ApiEvent::TicketUpdated { id, result: Ok(()) } => {
                tracing::info!("Updated ticket {}", id);
                if self.edit.as_ref().is_some_and(|s| s.ticket.id == id) {
                    self.edit = None;
                    if self.modal == ModalState::Edit {
                        self.modal = ModalState::None;
                    }
                }
                self.fetch_tickets();
            }
            ApiEvent::TicketUpdated { id, result: Err(e) } => {
                tracing::error!("Error updating ticket: {}", e);
                if let Some(session) = self.edit.as_mut().filter(|s| s.ticket.id == id) {
                    session.submitting = false;
                }
                self.alert = Some(UPDATE_FAILED.to_string());
            }

            ApiEvent::TicketDeleted { id, result } => {
                match result {
                    Ok(()) => tracing::info!("Deleted ticket {}", id),
                    Err(e) => tracing::warn!("Error deleting ticket: {}", e),
                }
                self.fetch_tickets();
            }
        }
    }

    /// Replace all rows with the given tickets.
    pub fn render_tickets(&mut self, tickets: &[Ticket], now: DateTime<Utc>) {
        self.rows = build_rows(tickets, now, &self.config.ui.date_format);
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.last_refresh = Some(now);
        self.calculate_optimal_widths();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // View state
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_row(&self) -> Option<&TicketRow> {
        self.rows.get(self.selected)
    }

    pub fn move_selection(&mut self, delta: i32) {
        if self.rows.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.selected + delta as usize).min(last)
        };
    }

    fn toggle_modal(&mut self, modal: ModalState) {
        self.modal = if self.modal == modal {
            ModalState::None
        } else {
            modal
        };
    }

    /// Close whatever modal is open. Closing the edit modal drops the session.
    pub fn close_modal(&mut self) {
        if self.modal == ModalState::Edit {
            self.edit = None;
        }
        self.modal = ModalState::None;
    }

    fn with_edit(&mut self, f: impl FnOnce(&mut EditSession)) {
        if let Some(session) = self.edit.as_mut() {
            f(session);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Advance spinner frame (call on tick while loading)
    pub fn tick_spinner(&mut self) {
        if self.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Size columns to the current rows.
    pub fn calculate_optimal_widths(&mut self) {
        let mut title = 8usize;
        let mut description = 12usize;
        let mut status = 8usize;
        let mut due = 10usize;

        for row in &self.rows {
            title = title.max(row.title.chars().count());
            description = description.max(row.description.chars().count());
            status = status.max(row.status.chars().count());
            due = due.max(row.due.chars().count());
        }

        self.column_widths[COL_IDX_TITLE] = title.min(40);
        self.column_widths[COL_IDX_DESCRIPTION] = description.min(60);
        self.column_widths[COL_IDX_STATUS] = status.min(14);
        self.column_widths[COL_IDX_DUE] = due.min(24);
        // Priority and Actions are fixed
    }
}

//! Message enum for Elm Architecture (TEA) pattern.
//!
//! All user actions are represented as messages and processed by
//! `App::update()`. Results of backend calls come back separately as
//! [`ApiEvent`](super::ApiEvent)s.

use crate::data::TicketId;

/// All possible user actions in the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,
    /// Re-fetch the current page
    Refresh,

    // ─────────────────────────────────────────────────────────────────────────
    // Row selection
    // ─────────────────────────────────────────────────────────────────────────
    MoveUp,
    MoveDown,
    GotoTop,
    GotoBottom,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    NextPage,
    PrevPage,
    GoToPage(u32),

    // ─────────────────────────────────────────────────────────────────────────
    // Row actions (bound to the selected row's id at dispatch time)
    // ─────────────────────────────────────────────────────────────────────────
    /// Fetch a ticket and open it in the edit modal
    EditTicket(TicketId),
    DeleteTicket(TicketId),

    // ─────────────────────────────────────────────────────────────────────────
    // Modal toggles
    // ─────────────────────────────────────────────────────────────────────────
    ToggleHelp,
    ToggleFilterMenu,
    /// Close current modal (generic close)
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Filter menu
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch between the status and priority selectors
    FilterSwitchField,
    /// Select the next value of the focused selector
    FilterNextValue,
    /// Select the previous value of the focused selector
    FilterPrevValue,
    /// Reset both selectors to "All"
    ClearFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Edit modal
    // ─────────────────────────────────────────────────────────────────────────
    EditFocusNext,
    EditFocusPrev,
    EditInput(char),
    EditBackspace,
    /// Cycle the status field (true = forward)
    EditCycleStatus(bool),
    SubmitEdit,

    // ─────────────────────────────────────────────────────────────────────────
    // Alert
    // ─────────────────────────────────────────────────────────────────────────
    DismissAlert,

    /// No operation (for unhandled keys or pending chords)
    None,
}

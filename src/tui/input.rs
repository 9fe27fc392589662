//! Input dispatch layer for Elm Architecture (TEA) pattern.
//!
//! Maps key events to messages based on current app mode. Row actions are
//! bound here: `e` / `d` resolve to the id of the row selected at the time of
//! the key press.

use super::edit::EditField;
use super::{App, Message};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Pending first key of a chord (only `gg` today).
#[derive(Debug, Default)]
pub struct InputState {
    pub pending: Option<KeyCode>,
    pub pending_since: Option<Instant>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there's a pending chord that has timed out (500ms).
    pub fn has_timed_out(&self) -> bool {
        if let Some(since) = self.pending_since {
            since.elapsed().as_millis() > 500
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.pending_since = None;
    }

    pub fn set_pending(&mut self, key: KeyCode) {
        self.pending = Some(key);
        self.pending_since = Some(Instant::now());
    }
}

/// Map key events to messages based on current app mode.
pub fn dispatch(app: &App, input: &mut InputState, key: KeyEvent) -> Message {
    // The alert blocks everything underneath it
    if app.show_alert() {
        input.clear();
        return dispatch_alert(key);
    }

    if let Some(pending) = input.pending.take() {
        input.pending_since = None;
        return handle_chord(pending, key.code);
    }

    if app.show_edit_modal() {
        dispatch_edit_modal(app, key)
    } else if app.show_help() {
        dispatch_help_modal(key)
    } else if app.show_filter_menu() {
        dispatch_filter_menu(key)
    } else {
        dispatch_normal_mode(app, input, key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode-specific dispatch functions
// ─────────────────────────────────────────────────────────────────────────────

/// Handle keys in normal mode (ticket table).
fn dispatch_normal_mode(app: &App, input: &mut InputState, key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::Quit,
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Char('j') | KeyCode::Down => Message::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Message::MoveUp,
        KeyCode::Char('G') => Message::GotoBottom,
        KeyCode::Char('g') => {
            input.set_pending(KeyCode::Char('g'));
            Message::None
        }
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => Message::NextPage,
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Message::PrevPage,
        KeyCode::Char('e') | KeyCode::Enter => app
            .selected_row()
            .map(|row| Message::EditTicket(row.id.clone()))
            .unwrap_or(Message::None),
        KeyCode::Char('d') | KeyCode::Delete => app
            .selected_row()
            .map(|row| Message::DeleteTicket(row.id.clone()))
            .unwrap_or(Message::None),
        KeyCode::Char('f') => Message::ToggleFilterMenu,
        KeyCode::Char('r') => Message::Refresh,
        KeyCode::Char('?') => Message::ToggleHelp,
        _ => Message::None,
    }
}

fn dispatch_alert(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Message::DismissAlert,
        _ => Message::None,
    }
}

fn dispatch_help_modal(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Message::CloseModal,
        _ => Message::None,
    }
}

fn dispatch_filter_menu(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => Message::CloseModal,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('l') => {
            Message::FilterSwitchField
        }
        KeyCode::Char('j') | KeyCode::Down => Message::FilterNextValue,
        KeyCode::Char('k') | KeyCode::Up => Message::FilterPrevValue,
        KeyCode::Char('a') => Message::ClearFilters,
        _ => Message::None,
    }
}

/// Handle keys in the edit form. Printable keys go into the focused field.
fn dispatch_edit_modal(app: &App, key: KeyEvent) -> Message {
    let on_status = app
        .edit
        .as_ref()
        .is_some_and(|s| s.focus == EditField::Status);

    match key.code {
        KeyCode::Esc => Message::CloseModal,
        KeyCode::Enter => Message::SubmitEdit,
        KeyCode::Tab | KeyCode::Down => Message::EditFocusNext,
        KeyCode::BackTab | KeyCode::Up => Message::EditFocusPrev,
        KeyCode::Backspace => Message::EditBackspace,
        KeyCode::Right if on_status => Message::EditCycleStatus(true),
        KeyCode::Left if on_status => Message::EditCycleStatus(false),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Message::EditInput(c)
        }
        _ => Message::None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chord handling
// ─────────────────────────────────────────────────────────────────────────────

/// Handle the second key of a chord sequence.
fn handle_chord(first: KeyCode, second: KeyCode) -> Message {
    match (first, second) {
        (KeyCode::Char('g'), KeyCode::Char('g')) => Message::GotoTop,
        _ => Message::None,
    }
}

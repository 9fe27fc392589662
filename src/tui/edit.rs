//! Edit form state for a single ticket.

use crate::data::{DueDate, Ticket};
use chrono::Local;

/// Layout of the due date field; matches a `datetime-local` input.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Description,
    Status,
    DueDate,
}

impl EditField {
    pub const ALL: [EditField; 4] = [
        EditField::Title,
        EditField::Description,
        EditField::Status,
        EditField::DueDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditField::Title => "Title",
            EditField::Description => "Description",
            EditField::Status => "Status",
            EditField::DueDate => "Due Date",
        }
    }

    pub fn next(self) -> Self {
        match self {
            EditField::Title => EditField::Description,
            EditField::Description => EditField::Status,
            EditField::Status => EditField::DueDate,
            EditField::DueDate => EditField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditField::Title => EditField::DueDate,
            EditField::Description => EditField::Title,
            EditField::Status => EditField::Description,
            EditField::DueDate => EditField::Status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: String,
}

impl EditForm {
    /// Prefill from a fetched ticket. `None` when the due date is missing or
    /// unparseable; such a ticket cannot be edited.
    pub fn from_ticket(ticket: &Ticket) -> Option<Self> {
        let due = ticket.due()?;
        Some(Self {
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status.clone(),
            due_date: due.with_timezone(&Local).format(FORM_DATE_FORMAT).to_string(),
        })
    }

    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::Title => &self.title,
            EditField::Description => &self.description,
            EditField::Status => &self.status,
            EditField::DueDate => &self.due_date,
        }
    }

    pub fn field_mut(&mut self, field: EditField) -> &mut String {
        match field {
            EditField::Title => &mut self.title,
            EditField::Description => &mut self.description,
            EditField::Status => &mut self.status,
            EditField::DueDate => &mut self.due_date,
        }
    }
}

/// The ticket currently open in the edit modal.
///
/// Only one session exists at a time; opening another ticket replaces it, and
/// the single submit path always reads whatever session is current.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Record as fetched; base of the PUT body
    pub ticket: Ticket,
    pub form: EditForm,
    pub focus: EditField,
    pub submitting: bool,
}

impl EditSession {
    pub fn open(ticket: Ticket) -> Option<Self> {
        let form = EditForm::from_ticket(&ticket)?;
        Some(Self {
            ticket,
            form,
            focus: EditField::Title,
            submitting: false,
        })
    }

    pub fn input(&mut self, c: char) {
        self.form.field_mut(self.focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.form.field_mut(self.focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the status field through `statuses`, starting from the first
    /// option when the current value is not one of them.
    pub fn cycle_status(&mut self, statuses: &[String], forward: bool) {
        if statuses.is_empty() {
            return;
        }
        let len = statuses.len();
        let next = match statuses.iter().position(|s| *s == self.form.status) {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.form.status = statuses[next].clone();
    }

    /// The full record to PUT: the fetched ticket with the form values on top.
    pub fn merged_ticket(&self) -> Ticket {
        Ticket {
            title: self.form.title.clone(),
            description: self.form.description.clone(),
            status: self.form.status.clone(),
            due_date: Some(DueDate::Text(self.form.due_date.clone())),
            ..self.ticket.clone()
        }
    }
}

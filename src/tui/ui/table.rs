//! Ticket table rendering - header, rows and pagination bar.

use super::icons;
use super::layout::{compute_column_layout, pad_to_width, ColumnLayout, PREFIX, SEP};
use super::status::priority_config;
use crate::data::TicketRow;
use crate::tui::app::{
    COLUMN_NAMES, COL_IDX_ACTIONS, COL_IDX_DESCRIPTION, COL_IDX_DUE, COL_IDX_PRIORITY,
    COL_IDX_STATUS, COL_IDX_TITLE, NUM_COLUMNS,
};
use crate::tui::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the application header.
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.is_loading() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![
        Span::styled(format!("{} ", icons::APP), Style::default().fg(Color::Cyan)),
        Span::styled(
            "ticketdesk ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.config.api.base_url.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let filters = app.filters.values();
    if !filters.is_empty() {
        let mut parts = Vec::new();
        if let Some(status) = &filters.status {
            parts.push(format!("status={}", status));
        }
        if let Some(priority) = &filters.priority {
            parts.push(format!("priority={}", priority));
        }
        spans.push(Span::styled(
            format!("  {} {}", icons::FILTER, parts.join(" ")),
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.is_loading() {
        spans.push(Span::styled(
            format!("  {} Loading...", app.spinner_char()),
            Style::default().fg(Color::Cyan),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

/// Draw the ticket table. Rows are rebuilt from `app.rows` on every frame.
pub fn draw_tickets(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tickets ({}) ", app.rows.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = compute_column_layout(&app.column_widths, inner.width);
    let sep_style = Style::default().fg(Color::DarkGray);

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let header_texts: [String; NUM_COLUMNS] = COLUMN_NAMES.map(str::to_string);
    let header = build_line(&layout, header_texts, |_| header_style, sep_style, PREFIX);

    let mut items = vec![ListItem::new(header)];

    if app.rows.is_empty() {
        let text = if app.last_refresh.is_some() {
            "  No tickets on this page"
        } else {
            "  Waiting for tickets..."
        };
        items.push(ListItem::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        ))));
    }

    for (idx, row) in app.rows.iter().enumerate() {
        let is_selected = idx == app.selected;
        items.push(ListItem::new(row_line(row, &layout, is_selected, sep_style)));
    }

    // Header occupies list index 0
    let mut state = ListState::default();
    if !app.rows.is_empty() {
        state.select(Some(app.selected + 1));
    }

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    f.render_stateful_widget(list, inner, &mut state);
}

fn row_line(row: &TicketRow, layout: &ColumnLayout, is_selected: bool, sep_style: Style) -> Line<'static> {
    let priority = priority_config(row.priority);
    let actions = format!("e{} d{}", icons::ACTION_EDIT, icons::ACTION_DELETE);
    let texts: [String; NUM_COLUMNS] = [
        row.title.clone(),
        row.description.clone(),
        row.status.clone(),
        row.due.clone(),
        format!("{} {}", priority.icon, row.priority.label()),
        actions,
    ];
    let prefix = if is_selected {
        format!("{} ", icons::SELECTED_ROW)
    } else {
        PREFIX.to_string()
    };

    build_line(
        layout,
        texts,
        |idx| match idx {
            COL_IDX_TITLE => Style::default().fg(Color::White),
            COL_IDX_DESCRIPTION | COL_IDX_DUE => Style::default().fg(Color::Gray),
            COL_IDX_STATUS => Style::default().fg(Color::Cyan),
            COL_IDX_PRIORITY => priority.style,
            COL_IDX_ACTIONS if is_selected => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::DarkGray),
        },
        sep_style,
        &prefix,
    )
}

fn build_line(
    layout: &ColumnLayout,
    texts: [String; NUM_COLUMNS],
    style_for: impl Fn(usize) -> Style,
    sep_style: Style,
    prefix: &str,
) -> Line<'static> {
    let mut spans = vec![Span::raw(prefix.to_string())];
    let mut first = true;
    for (idx, text) in texts.iter().enumerate() {
        if !layout.is_visible(idx) {
            continue;
        }
        if !first {
            spans.push(Span::styled(SEP, sep_style));
        }
        first = false;
        spans.push(Span::styled(
            pad_to_width(text, layout.widths[idx], Alignment::Left),
            style_for(idx),
        ));
    }
    Line::from(spans)
}

/// Draw the Previous / Page N / Next controls.
pub fn draw_pagination(f: &mut Frame, app: &App, area: Rect) {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let key_style = Style::default().fg(Color::Cyan);

    let prev_style = if app.pagination.has_previous() {
        enabled
    } else {
        disabled
    };

    let line = Line::from(vec![
        Span::styled(format!("{} Previous", icons::PAGE_PREV), prev_style),
        Span::styled(" [p]", if app.pagination.has_previous() { key_style } else { disabled }),
        Span::styled(
            format!("   Page {}   ", app.pagination.page()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("[n] ", key_style),
        Span::styled(format!("Next {}", icons::PAGE_NEXT), enabled),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

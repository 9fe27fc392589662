//! Modal popups - edit form and blocking alert.

use super::layout::{display_width, fit_lines_to_area, popup_rect, truncate_with_ellipsis};
use crate::tui::edit::EditField;
use crate::tui::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const LABEL_WIDTH: usize = 13;

pub fn draw_edit_modal(f: &mut Frame, app: &App) {
    let Some(session) = app.edit.as_ref() else {
        return;
    };

    let area = popup_rect(60, 50, 50, 16, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Edit Ticket #{} ", session.ticket.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + 4);

    let label_style = Style::default().fg(Color::Cyan);
    let focused_label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = vec![Line::from("")];

    for field in EditField::ALL {
        let focused = session.focus == field;
        let value = session.form.field(field);

        // Keep the tail visible while typing
        let shown = if focused && display_width(value) + 1 > value_width {
            // Room for the leading ellipsis and the cursor
            let keep = value_width.saturating_sub(2);
            let count = value.chars().count();
            format!("…{}", value.chars().skip(count.saturating_sub(keep)).collect::<String>())
        } else {
            truncate_with_ellipsis(value, value_width)
        };

        let mut spans = vec![
            Span::styled(
                format!("  {:<width$}", field.label(), width = LABEL_WIDTH),
                if focused { focused_label } else { label_style },
            ),
            Span::styled(shown, value_style),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));

        let hint = match field {
            EditField::Status if focused => Some("←/→ to pick a status"),
            EditField::DueDate if focused => Some("YYYY-MM-DDTHH:MM, local time"),
            _ => None,
        };
        if let Some(hint) = hint {
            lines.push(Line::from(Span::styled(
                format!("  {:<width$}{}", "", hint, width = LABEL_WIDTH),
                dim_style,
            )));
        }
        lines.push(Line::from(""));
    }

    let footer = if session.submitting {
        Span::styled("  Saving...", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("  Tab: next field | Enter: save | Esc: cancel", dim_style)
    };
    lines.push(Line::from(footer));

    let lines = fit_lines_to_area(lines, inner, 1);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Blocking alert, drawn over everything else.
pub fn draw_alert(f: &mut Frame, app: &App) {
    let Some(message) = app.alert.as_deref() else {
        return;
    };

    let area = popup_rect(40, 20, 36, 7, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[ OK ]  Enter", Style::default().fg(Color::Red))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

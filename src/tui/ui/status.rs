//! Priority styling, status bar and help popup.

use super::icons;
use super::layout::{fit_lines_to_area, popup_rect};
use crate::data::Priority;
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Icon and style for a value shown in the table.
pub struct StatusConfig {
    pub icon: &'static str,
    pub style: Style,
}

pub fn priority_config(priority: Priority) -> StatusConfig {
    match priority {
        Priority::High => StatusConfig {
            icon: icons::PRIORITY_HIGH,
            style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        },
        Priority::Medium => StatusConfig {
            icon: icons::PRIORITY_MEDIUM,
            style: Style::default().fg(Color::Yellow),
        },
        Priority::Low => StatusConfig {
            icon: icons::PRIORITY_LOW,
            style: Style::default().fg(Color::Green),
        },
    }
}

pub fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;

    let hints = if app.show_alert() {
        " Enter: dismiss "
    } else if app.show_edit_modal() {
        if width >= 80 {
            " Tab: next field | ←/→: cycle status | Enter: save | Esc: cancel "
        } else {
            " Tab Enter Esc "
        }
    } else if app.show_filter_menu() {
        " Tab: switch | j/k: change | a: clear | Esc: close "
    } else if width >= 100 {
        " j/k: select | n/p: page | e: edit | d: delete | f: filter | r: refresh | ?: help | q: quit "
    } else if width >= 60 {
        " j/k n/p e:edit d:del f:filter ?:help q "
    } else {
        " ?: help "
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    if let Some(at) = app.last_refresh {
        spans.push(Span::styled(
            format!(
                " updated {} ",
                at.with_timezone(&chrono::Local).format("%H:%M:%S")
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

const SHORTCUTS: &[(&str, &str)] = &[
    ("j / k", "Select next / previous ticket"),
    ("gg / G", "First / last ticket"),
    ("n / p", "Next / previous page"),
    ("e / Enter", "Edit selected ticket"),
    ("d", "Delete selected ticket"),
    ("f", "Status / priority filters"),
    ("r", "Reload current page"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

pub fn draw_help_popup(f: &mut Frame, _app: &App) {
    let area = popup_rect(60, 70, 44, 16, f.area());
    f.render_widget(Clear, area);

    let key_style = Style::default().fg(Color::Cyan);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from("")];
    for (keys, action) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", keys), key_style),
            Span::raw(*action),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Priority", key_style)));
    for (priority, rule) in [
        (Priority::High, "due in 2 minutes or less (or overdue)"),
        (Priority::Medium, "due in 2-3 minutes"),
        (Priority::Low, "later, or no valid due date"),
    ] {
        let config = priority_config(priority);
        lines.push(Line::from(vec![
            Span::styled(format!("  {} {:<7}", config.icon, priority.label()), config.style),
            Span::styled(rule, dim_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Esc / ?: close", dim_style)));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

//! Filter menu rendering.

use super::layout::{fit_lines_to_area, popup_rect};
use crate::data::{FilterField, FilterSelector};
use crate::tui::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_filter_menu(f: &mut Frame, app: &App) {
    let option_rows = app.filters.status.options.len() + app.filters.priority.options.len() + 2;
    let height = (option_rows + 9) as u16;
    let area = popup_rect(40, 60, 36, height, f.area());

    f.render_widget(Clear, area);

    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = vec![Line::from("")];
    push_selector(
        &mut lines,
        "Status",
        &app.filters.status,
        app.filters.focus == FilterField::Status,
    );
    lines.push(Line::from(""));
    push_selector(
        &mut lines,
        "Priority",
        &app.filters.priority,
        app.filters.focus == FilterField::Priority,
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: switch | j/k: change | a: all",
        dim_style,
    )));

    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn push_selector(lines: &mut Vec<Line<'static>>, label: &str, selector: &FilterSelector, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    lines.push(Line::from(Span::styled(
        format!("  {}{}", label, if focused { " ◂" } else { "" }),
        label_style,
    )));

    let entries = std::iter::once((None, "All".to_string())).chain(
        selector
            .options
            .iter()
            .enumerate()
            .map(|(idx, opt)| (Some(idx), opt.clone())),
    );

    for (idx, text) in entries {
        let is_selected = selector.selected == idx;
        let (marker, style) = if is_selected {
            ("●", Style::default().fg(Color::Green))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("    {} ", marker), style),
            Span::styled(
                text,
                if is_selected {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
        ]));
    }
}

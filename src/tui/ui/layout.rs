//! Layout calculations and text utilities for the TUI.

use once_cell::sync::Lazy;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::{
    COL_IDX_ACTIONS, COL_IDX_DESCRIPTION, COL_IDX_DUE, COL_IDX_PRIORITY, COL_IDX_STATUS,
    COL_IDX_TITLE, NUM_COLUMNS,
};

/// Pre-computed padding strings; column widths stay well under 100.
static PADDING: Lazy<Vec<String>> = Lazy::new(|| (0..=100).map(|n| " ".repeat(n)).collect());

#[inline]
fn get_padding(width: usize) -> &'static str {
    &PADDING[width.min(100)]
}

pub const PREFIX: &str = "  ";
pub const PREFIX_WIDTH: usize = 2;
pub const SEP: &str = " │ ";
pub const SEP_WIDTH: usize = 3;

pub const COL_MIN_WIDTHS: [usize; NUM_COLUMNS] = [10, 10, 6, 10, 8, 7];
/// Columns dropped first when the terminal is narrow. Title never hides.
pub const COL_HIDE_ORDER: [usize; 5] = [
    COL_IDX_DESCRIPTION,
    COL_IDX_ACTIONS,
    COL_IDX_STATUS,
    COL_IDX_DUE,
    COL_IDX_PRIORITY,
];

#[derive(Clone, Copy)]
pub struct ColumnLayout {
    pub widths: [usize; NUM_COLUMNS],
    pub visible: [bool; NUM_COLUMNS],
}

impl ColumnLayout {
    pub fn is_visible(&self, idx: usize) -> bool {
        self.visible[idx] && self.widths[idx] > 0
    }
}

/// Compute column widths and visibility for the available space.
///
/// Columns are hidden in `COL_HIDE_ORDER` until the minimum widths fit, then
/// spare space goes to each column up to its preferred width, and whatever is
/// left to the description (or the title when the description is hidden).
pub fn compute_column_layout(
    preferred: &[usize; NUM_COLUMNS],
    available_width: u16,
) -> ColumnLayout {
    let available = available_width as usize;
    let mut visible = [true; NUM_COLUMNS];
    let mut min_total = min_total_width(&visible);

    for &idx in &COL_HIDE_ORDER {
        if min_total <= available {
            break;
        }
        visible[idx] = false;
        min_total = min_total_width(&visible);
    }

    let mut widths = [0; NUM_COLUMNS];
    for i in 0..NUM_COLUMNS {
        if visible[i] {
            widths[i] = COL_MIN_WIDTHS[i];
        }
    }

    if min_total > available {
        // Only the title is left and even that does not fit
        widths[COL_IDX_TITLE] = available.saturating_sub(PREFIX_WIDTH);
        return ColumnLayout { widths, visible };
    }

    let mut remaining = available - min_total;
    for idx in 0..NUM_COLUMNS {
        if !visible[idx] {
            continue;
        }
        let cap = preferred[idx].max(COL_MIN_WIDTHS[idx]) - widths[idx];
        let add = remaining.min(cap);
        widths[idx] += add;
        remaining -= add;
    }

    let sink = if visible[COL_IDX_DESCRIPTION] {
        COL_IDX_DESCRIPTION
    } else {
        COL_IDX_TITLE
    };
    widths[sink] += remaining;

    ColumnLayout { widths, visible }
}

fn min_total_width(visible: &[bool; NUM_COLUMNS]) -> usize {
    let visible_count = visible.iter().filter(|v| **v).count();
    if visible_count == 0 {
        return 0;
    }
    let sep_total = (visible_count - 1) * SEP_WIDTH;
    let widths_total: usize = COL_MIN_WIDTHS
        .iter()
        .enumerate()
        .filter(|(idx, _)| visible[*idx])
        .map(|(_, w)| *w)
        .sum();
    PREFIX_WIDTH + sep_total + widths_total
}

/// Display width of text (accounting for Unicode).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate text to a maximum display width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncate text with an ellipsis if it exceeds max width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }
    let truncated = truncate_to_width(text, max_width - 1);
    format!("{truncated}…")
}

/// Pad text to a specific width with given alignment, truncating if longer.
pub fn pad_to_width(text: &str, width: usize, alignment: Alignment) -> String {
    let mut trimmed = truncate_with_ellipsis(text, width);
    let pad = width.saturating_sub(display_width(&trimmed));
    match alignment {
        Alignment::Left => {
            trimmed.push_str(get_padding(pad));
            trimmed
        }
        Alignment::Right => format!("{}{}", get_padding(pad), trimmed),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", get_padding(left), trimmed, get_padding(pad - left))
        }
    }
}

/// Fit a Line to a maximum width by truncating spans.
pub fn fit_line_to_width<'a>(line: Line<'a>, max_width: usize) -> Line<'a> {
    let Line {
        spans,
        alignment,
        style,
    } = line;
    let mut out: Vec<Span<'a>> = Vec::new();
    let mut used = 0usize;

    for span in spans {
        let span_width = display_width(span.content.as_ref());
        if used + span_width <= max_width {
            used += span_width;
            out.push(span);
        } else {
            let truncated = truncate_to_width(span.content.as_ref(), max_width - used);
            if !truncated.is_empty() {
                out.push(Span::styled(truncated, span.style));
            }
            break;
        }
    }

    Line {
        spans: out,
        alignment,
        style,
    }
}

/// Fit lines to an area; overflowing lines collapse into an ellipsis row,
/// keeping the last `keep_bottom` lines (footers) visible.
pub fn fit_lines_to_area<'a>(lines: Vec<Line<'a>>, inner: Rect, keep_bottom: usize) -> Vec<Line<'a>> {
    let width = inner.width as usize;
    let height = inner.height as usize;
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let mut fitted: Vec<Line<'a>> = lines
        .into_iter()
        .map(|line| fit_line_to_width(line, width))
        .collect();

    if fitted.len() <= height {
        return fitted;
    }

    let keep_bottom = keep_bottom.min(height.saturating_sub(1));
    let top_take = height - keep_bottom - 1;
    let tail_start = fitted.len() - keep_bottom;
    let tail: Vec<Line<'a>> = fitted.drain(tail_start..).collect();

    let mut out: Vec<Line<'a>> = fitted.into_iter().take(top_take).collect();
    out.push(Line::from(Span::styled(
        pad_to_width("…", width, Alignment::Center),
        Style::default().fg(Color::DarkGray),
    )));
    out.extend(tail);
    out
}

/// Calculate a centered popup rectangle within a container.
pub fn popup_rect(percent_x: u16, percent_y: u16, min_width: u16, min_height: u16, r: Rect) -> Rect {
    let max_width = r.width.saturating_sub(2).max(1);
    let max_height = r.height.saturating_sub(2).max(1);

    let width = (r.width.saturating_mul(percent_x) / 100)
        .max(min_width)
        .min(max_width);
    let height = (r.height.saturating_mul(percent_y) / 100)
        .max(min_height)
        .min(max_height);

    Rect {
        x: r.x + (r.width.saturating_sub(width)) / 2,
        y: r.y + (r.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_and_truncate() {
        assert_eq!(pad_to_width("abc", 5, Alignment::Left), "abc  ");
        assert_eq!(pad_to_width("abc", 5, Alignment::Right), "  abc");
        assert_eq!(pad_to_width("abcdef", 4, Alignment::Left), "abc…");
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_wide_layout_shows_everything() {
        let preferred = [20, 30, 10, 19, 8, 9];
        let layout = compute_column_layout(&preferred, 200);
        assert!(layout.visible.iter().all(|v| *v));
        assert_eq!(layout.widths[COL_IDX_TITLE], 20);
        assert!(layout.widths[COL_IDX_DESCRIPTION] >= 30);
    }

    #[test]
    fn test_narrow_layout_hides_description_first() {
        let preferred = [20, 30, 10, 19, 8, 9];
        let layout = compute_column_layout(&preferred, 60);
        assert!(!layout.is_visible(COL_IDX_DESCRIPTION));
        assert!(layout.is_visible(COL_IDX_TITLE));
    }

    #[test]
    fn test_tiny_layout_keeps_title() {
        let layout = compute_column_layout(&[20, 30, 10, 19, 8, 9], 8);
        assert!(layout.is_visible(COL_IDX_TITLE));
        assert_eq!(layout.widths[COL_IDX_TITLE], 6);
        assert!(!layout.visible[COL_IDX_PRIORITY]);
    }

    #[test]
    fn test_fit_lines_keeps_footer() {
        let lines: Vec<Line> = (0..10).map(|i| Line::from(format!("line {i}"))).collect();
        let area = Rect::new(0, 0, 20, 4);
        let fitted = fit_lines_to_area(lines, area, 1);
        assert_eq!(fitted.len(), 4);
        assert_eq!(fitted[3].spans[0].content, "line 9");
    }
}

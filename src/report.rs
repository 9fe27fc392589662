//! Plain-text rendering of a ticket page for `ticketdesk list`.

use crate::data::{PaginationState, TicketRow};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 6] = ["ID", "Title", "Description", "Status", "Due Date", "Priority"];
const MAX_CELL: usize = 40;

fn cells(row: &TicketRow) -> [String; 6] {
    [
        row.id.to_string(),
        row.title.clone(),
        row.description.clone(),
        row.status.clone(),
        row.due.clone(),
        row.priority.label().to_string(),
    ]
}

fn clip(text: &str) -> String {
    if text.width() <= MAX_CELL {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 2 > MAX_CELL {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

/// Aligned table followed by a page footer.
pub fn render_plain(rows: &[TicketRow], pagination: PaginationState) -> String {
    let table: Vec<[String; 6]> = rows
        .iter()
        .map(|row| cells(row).map(|cell| clip(&cell)))
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for cells in &table {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.width());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    };

    push_row(&HEADERS.map(str::to_string));
    for cells in &table {
        push_row(cells);
    }

    if rows.is_empty() {
        out.push_str("(no tickets on this page)\n");
    }
    let _ = writeln!(out, "\nPage {}", pagination.page());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Priority, TicketId};

    fn row(id: i64, title: &str) -> TicketRow {
        TicketRow {
            id: TicketId::Number(id),
            title: title.to_string(),
            description: "desc".to_string(),
            status: "open".to_string(),
            due: "2024-01-01 10:00:00".to_string(),
            priority: Priority::Low,
        }
    }

    #[test]
    fn test_columns_align() {
        let text = render_plain(
            &[row(1, "Short"), row(22, "A much longer title")],
            PaginationState::default(),
        );
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("ID  Title"));
        let title_col = lines[0].find("Title").unwrap();
        assert_eq!(&lines[1][title_col..title_col + 5], "Short");
        assert_eq!(&lines[2][title_col..title_col + 6], "A much");
        assert!(text.ends_with("Page 1\n"));
    }

    #[test]
    fn test_empty_page() {
        let text = render_plain(&[], PaginationState::default().navigate(9));
        assert!(text.contains("(no tickets on this page)"));
        assert!(text.contains("Page 9"));
    }

    #[test]
    fn test_long_cells_are_clipped() {
        let long = "x".repeat(100);
        let text = render_plain(&[row(1, &long)], PaginationState::default());
        assert!(text.contains('…'));
        assert!(!text.contains(&long));
    }
}

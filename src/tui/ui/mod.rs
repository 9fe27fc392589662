//! TUI rendering module.
//!
//! - `icons` - glyphs used throughout the UI
//! - `layout` - column layout and text utilities
//! - `status` - priority styling, status bar, help popup
//! - `table` - header, ticket table, pagination bar
//! - `modals` - edit form and blocking alert
//! - `menus` - filter menu

pub mod icons;
pub mod layout;
mod menus;
mod modals;
mod status;
mod table;

pub use self::draw::draw;

mod draw {
    use super::menus::draw_filter_menu;
    use super::modals::{draw_alert, draw_edit_modal};
    use super::status::{draw_help_popup, draw_status_bar};
    use super::table::{draw_header, draw_pagination, draw_tickets};
    use crate::tui::App;
    use ratatui::{
        layout::{Constraint, Direction, Layout},
        Frame,
    };

    /// Main draw function - renders the entire TUI.
    pub fn draw(f: &mut Frame, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Ticket table
                Constraint::Length(1), // Pagination
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        draw_header(f, app, chunks[0]);
        draw_tickets(f, app, chunks[1]);
        draw_pagination(f, app, chunks[2]);
        draw_status_bar(f, app, chunks[3]);

        // Overlays
        if app.show_help() {
            draw_help_popup(f, app);
        }

        if app.show_filter_menu() {
            draw_filter_menu(f, app);
        }

        if app.show_edit_modal() {
            draw_edit_modal(f, app);
        }

        // Alert stacks on top of the edit modal
        if app.show_alert() {
            draw_alert(f, app);
        }
    }
}

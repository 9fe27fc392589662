mod app;
pub mod edit;
mod input;
mod message;
mod ui;

use crate::config::Config;
use crate::integrations::TicketApi;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

pub use app::{
    ApiEvent, App, ModalState, COLUMN_NAMES, LOAD_EDIT_FAILED, NUM_COLUMNS, UPDATE_FAILED,
};
pub use message::Message;

pub async fn run(config: Config, api: Arc<dyn TicketApi>) -> Result<()> {
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("ticketdesk requires an interactive terminal (use `ticketdesk list` instead)");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, api);

    // Initial fetch; the UI shows immediately with a loading state
    app.fetch_tickets();

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms);
    let mut last_tick = std::time::Instant::now();
    let mut input_state = input::InputState::new();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    let msg = input::dispatch(app, &mut input_state, key);
                    if app.update(msg) {
                        return Ok(());
                    }
                }
            }
        }

        if input_state.has_timed_out() {
            input_state.clear();
        }

        // Apply any backend results that arrived meanwhile
        app.poll_events();

        if last_tick.elapsed() >= tick_rate {
            app.tick_spinner();
            last_tick = std::time::Instant::now();
        }
    }
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use ticketdesk::config::{self, Config};
use ticketdesk::data::{build_rows, ListFilters, PaginationState, TicketQuery};
use ticketdesk::integrations::{TicketApi, TicketClient};
use ticketdesk::{report, tui};

#[derive(Parser, Debug)]
#[command(name = "ticketdesk")]
#[command(about = "Browse, edit and delete tickets on a REST backend")]
#[command(version)]
struct Args {
    /// Initialize configuration
    #[arg(long)]
    init: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Ticket collection URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Tickets per page (overrides config)
    #[arg(long)]
    page_size: Option<u32>,

    /// Write logs here instead of the default log file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of tickets and exit
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init {
        config::init_wizard().await?;
        return Ok(());
    }

    let config = config::load(args.config.as_deref())?
        .with_overrides(args.api_url.clone(), args.page_size);
    config.validate()?;

    init_logging(&config, args.log_file.as_deref())?;
    tracing::info!("Using ticket API at {}", config.api.base_url);

    let api: Arc<dyn TicketApi> = Arc::new(TicketClient::new(&config.api)?);

    match args.command {
        Some(Command::List {
            page,
            status,
            priority,
        }) => list(&config, api.as_ref(), page, status, priority).await,
        None => tui::run(config, api).await,
    }
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(config: &Config, cli_path: Option<&Path>) -> Result<()> {
    let path = match cli_path.or(config.logging.file.as_deref()) {
        Some(p) => p.to_path_buf(),
        None => config::default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ticketdesk=info".parse()?),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn list(
    config: &Config,
    api: &dyn TicketApi,
    page: u32,
    status: Option<String>,
    priority: Option<String>,
) -> Result<()> {
    let pagination = PaginationState::default().navigate(page);
    let filters = ListFilters::from_values(
        status.as_deref().unwrap_or_default(),
        priority.as_deref().unwrap_or_default(),
    );
    let query =
        TicketQuery::new(pagination.page(), config.pagination.page_size).with_filters(&filters);

    let tickets = api
        .list(&query)
        .await
        .context("Failed to fetch tickets")?;
    let rows = build_rows(&tickets, chrono::Utc::now(), &config.ui.date_format);
    print!("{}", report::render_plain(&rows, pagination));
    Ok(())
}

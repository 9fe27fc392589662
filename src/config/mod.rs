use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection URL, e.g. `http://localhost:3000/tickets`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout. Unset means requests may wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/tickets";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Apply the active filters when paging and refreshing, not only when a
    /// filter changes.
    #[serde(default)]
    pub sticky_filters: bool,
}

pub const DEFAULT_PAGE_SIZE: u32 = 5;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sticky_filters: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Options offered by the status selector and the edit form.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
}

fn default_statuses() -> Vec<String> {
    ["open", "in-progress", "closed"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            statuses: default_statuses(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// strftime pattern for the due date column (local time)
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Apply command-line overrides on top of the file.
    pub fn with_overrides(mut self, api_url: Option<String>, page_size: Option<u32>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(size) = page_size {
            self.pagination.page_size = size;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("api.base_url must be an http(s) URL, got {:?}", url);
        }
        if self.pagination.page_size == 0 {
            anyhow::bail!("pagination.page_size must be at least 1");
        }
        if self.ui.tick_rate_ms == 0 {
            anyhow::bail!("ui.tick_rate_ms must be at least 1");
        }
        let bad_format = chrono::format::StrftimeItems::new(&self.ui.date_format)
            .any(|item| matches!(item, chrono::format::Item::Error));
        if bad_format {
            anyhow::bail!("ui.date_format is not a valid strftime pattern: {:?}", self.ui.date_format);
        }
        Ok(())
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "ticketdesk").context("Could not determine home directory")
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn default_log_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("ticketdesk.log"))
}

/// Load configuration.
///
/// An explicit path must exist. When no path is given and the default file
/// is absent, built-in defaults are used.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                tracing::debug!("No config at {}, using defaults", p.display());
                return Ok(Config::default());
            }
            p
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    parse(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
}

/// Parse and validate TOML config text.
pub fn parse(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub async fn init_wizard() -> Result<()> {
    use std::io::{self, Write};

    println!("ticketdesk Configuration Wizard");
    println!("===============================\n");

    let config_path = default_config_path()?;
    if config_path.exists() {
        print!("Config already exists at {}. Overwrite? [y/N] ", config_path.display());
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    print!("Ticket API URL [{}]: ", DEFAULT_BASE_URL);
    io::stdout().flush()?;
    let mut base_url = String::new();
    io::stdin().read_line(&mut base_url)?;

    print!("Tickets per page [{}]: ", DEFAULT_PAGE_SIZE);
    io::stdout().flush()?;
    let mut page_size = String::new();
    io::stdin().read_line(&mut page_size)?;

    let mut config = Config::default();
    if !base_url.trim().is_empty() {
        config.api.base_url = base_url.trim().to_string();
    }
    if !page_size.trim().is_empty() {
        config.pagination.page_size = page_size
            .trim()
            .parse()
            .with_context(|| format!("Invalid page size: {}", page_size.trim()))?;
    }
    config.validate()?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(&config)?;
    std::fs::write(&config_path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&config_path, std::fs::Permissions::from_mode(0o600))?;
    }

    println!("\nConfig saved to {}", config_path.display());
    println!("Run `ticketdesk` to open the ticket list.");

    Ok(())
}

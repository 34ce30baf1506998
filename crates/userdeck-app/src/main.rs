mod app;
mod app_log;
mod command;
mod event;
mod keybindings;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use userdeck_config::{check_collisions, validate_keybindings, AppConfig, ThemeMode};
use userdeck_core::DirectoryClient;

use crate::app::App;
use crate::app_log::AppLogMakeWriter;
use crate::event::EventHandler;

#[derive(Debug, Parser)]
#[command(name = "userdeck", version, about = "Terminal dashboard for a remote user directory")]
struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fetch users from this URL.
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Start with the light theme.
    #[arg(long)]
    light: bool,

    /// Log filter directive, e.g. `debug` or `userdeck_core=trace`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Write the default configuration to the user config path and exit.
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = AppConfig::init_default()?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let filter = match &cli.log_level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false).with_writer(AppLogMakeWriter).init();

    let config = load_config(&cli)?;
    let client = DirectoryClient::new(&config.directory.endpoint, &config.directory.user_agent)?;
    tracing::info!("Using directory endpoint {}", client.endpoint());

    install_panic_hook();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(config.tick_rate_ms()));
    let mut app = App::new(&config, Arc::new(client), events.app_tx());
    let result = app.run(&mut terminal, events).await;

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => {
            let (config, warnings) = AppConfig::load();
            for warning in warnings {
                tracing::warn!("Ignoring user config: {warning}");
            }
            config
        }
    };

    if let Some(endpoint) = &cli.endpoint {
        config.directory.endpoint = endpoint.clone();
    }
    if cli.light {
        config.general.theme_mode = ThemeMode::Light;
    }

    for (group, name, error) in validate_keybindings(&config.keybindings) {
        tracing::warn!("Invalid keybinding {group}.{name}: {error}");
    }
    for (key, first, second) in check_collisions(&config.keybindings) {
        tracing::warn!("Key {key} is bound in both {first} and {second}");
    }

    Ok(config)
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

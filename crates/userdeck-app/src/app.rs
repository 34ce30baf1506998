use std::sync::Arc;

use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use userdeck_config::{AppConfig, ThemeConfig};
use userdeck_core::{DirectoryState, FetchTask, UserSource};
use userdeck_tui::theme::Theme;

use crate::event::{AppEvent, EventHandler};
use crate::keybindings::KeybindingDispatcher;

mod fetch;
mod input;
mod render;

const APP_LOG_LINES: usize = 500;

pub struct App {
    running: bool,
    dispatcher: KeybindingDispatcher,
    directory: DirectoryState,
    source: Arc<dyn UserSource>,
    fetch_task: Option<FetchTask>,
    endpoint: String,
    show_app_logs: bool,
    app_logs: Vec<String>,
    app_tx: mpsc::UnboundedSender<AppEvent>,
    theme: Theme,
    theme_config: ThemeConfig,
}

impl App {
    /// `app_tx` is where fetch results are reported; it must feed the
    /// `EventHandler` later passed to [`App::run`].
    pub fn new(config: &AppConfig, source: Arc<dyn UserSource>, app_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            running: true,
            dispatcher: KeybindingDispatcher::from_config(&config.keybindings),
            directory: DirectoryState::new(),
            source,
            fetch_task: None,
            endpoint: config.directory.endpoint.clone(),
            show_app_logs: false,
            app_logs: Vec::new(),
            app_tx,
            theme: Theme::from_config(&config.theme, config.general.theme_mode),
            theme_config: config.theme.clone(),
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        mut events: EventHandler,
    ) -> anyhow::Result<()> {
        self.start_fetch();

        while self.running {
            terminal.draw(|frame| self.draw(frame))?;

            let first = events.next().await?;
            self.handle_event(first);

            for event in events.drain_pending() {
                if !self.running {
                    break;
                }
                self.handle_event(event);
            }
        }

        // Tear down any in-flight request so its result is never applied.
        self.fetch_task = None;
        Ok(())
    }
}

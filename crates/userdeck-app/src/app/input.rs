use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{debug, info};

use crate::app_log;
use crate::command::{Command, InputMode};
use crate::event::AppEvent;

use super::{App, APP_LOG_LINES};

impl App {
    pub(super) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => {
                if self.show_app_logs {
                    self.app_logs = app_log::recent_lines(APP_LOG_LINES);
                }
            }
            AppEvent::Resize(_, _) => {}
            AppEvent::FetchFinished { seq, outcome } => self.finish_fetch(seq, outcome),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(cmd) = self.dispatcher.dispatch(key) {
            self.handle_command(cmd);
        }
    }

    pub(super) fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => {
                self.fetch_task = None;
                self.running = false;
            }
            Command::ToggleTheme => {
                self.theme = self.theme.toggled(&self.theme_config);
                info!("Theme switched to {}", self.theme.mode.label());
            }
            Command::ToggleAppLogs => {
                self.show_app_logs = !self.show_app_logs;
                if self.show_app_logs {
                    self.app_logs = app_log::recent_lines(APP_LOG_LINES);
                }
            }
            Command::EnterMode(mode) => self.dispatcher.set_mode(mode),
            Command::ExitMode => self.dispatcher.set_mode(InputMode::Normal),
            Command::NextPage => {
                if !self.directory.next_page() {
                    debug!("Already on the last page");
                }
            }
            Command::PrevPage => {
                if !self.directory.prev_page() {
                    debug!("Already on the first page");
                }
            }
            Command::Retry => self.retry_fetch(),
            Command::ClearSearch => self.directory.clear_search(),
            Command::SearchInput(c) => self.directory.push_search_char(c),
            Command::SearchBackspace => self.directory.pop_search_char(),
        }
    }
}

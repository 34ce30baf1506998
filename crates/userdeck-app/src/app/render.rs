use ratatui::Frame;

use userdeck_tui::layout::{render_root, RenderContext};
use userdeck_tui::widgets::user_directory::DirectoryKeys;

use crate::command::InputMode;

use super::App;

impl App {
    pub(super) fn mode_name(&self) -> &'static str {
        match self.dispatcher.mode() {
            InputMode::Normal => "Normal",
            InputMode::Search => "Search",
        }
    }

    pub(super) fn status_hints(&self) -> Vec<(String, String)> {
        match self.dispatcher.mode() {
            InputMode::Search => {
                let mut hints = vec![("Enter".to_string(), "Done".to_string())];
                if let Some(key) = self.dispatcher.key_for("clear_search") {
                    hints.push((key, "Clear".into()));
                }
                hints
            }
            InputMode::Normal => {
                let mut hints = self.dispatcher.browse_shortcuts();
                hints.extend(self.dispatcher.global_shortcuts());
                hints
            }
        }
    }

    pub(super) fn draw(&self, frame: &mut Frame) {
        let hints = self.status_hints();
        let [search, prev, next, retry, toggle_theme] =
            ["search", "prev_page", "next_page", "retry", "toggle_theme"].map(|name| self.dispatcher.key_for(name));

        let ctx = RenderContext {
            directory: self.directory.view(),
            search_active: self.dispatcher.mode() == InputMode::Search,
            directory_keys: DirectoryKeys {
                search: search.as_deref(),
                prev: prev.as_deref(),
                next: next.as_deref(),
                retry: retry.as_deref(),
            },
            app_logs: self.show_app_logs.then_some(self.app_logs.as_slice()),
            endpoint: Some(self.endpoint.as_str()),
            mode_name: self.mode_name(),
            hints: &hints,
            toggle_theme_key: toggle_theme.as_deref(),
            theme: &self.theme,
        };
        render_root(frame, &ctx);
    }
}

use ratatui::prelude::*;
use userdeck_core::DirectoryView;

use crate::theme::Theme;
use crate::widgets::app_logs::AppLogsWidget;
use crate::widgets::navbar::NavbarWidget;
use crate::widgets::status_bar::StatusBarWidget;
use crate::widgets::user_directory::{DirectoryKeys, UserDirectoryWidget};

pub const APP_TITLE: &str = "userdeck";
const SECTIONS: &[&str] = &["Users"];

pub struct RenderContext<'a> {
    pub directory: DirectoryView<'a>,
    pub search_active: bool,
    pub directory_keys: DirectoryKeys<'a>,
    pub app_logs: Option<&'a [String]>,
    pub endpoint: Option<&'a str>,
    pub mode_name: &'a str,
    pub hints: &'a [(String, String)],
    pub toggle_theme_key: Option<&'a str>,
    pub theme: &'a Theme,
}

pub fn render_root(frame: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_navbar(frame, chunks[0], ctx);
    render_body(frame, chunks[1], ctx);
    render_status_bar(frame, chunks[2], ctx);
}

fn render_navbar(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let widget =
        NavbarWidget { title: APP_TITLE, sections: SECTIONS, toggle_theme_key: ctx.toggle_theme_key, theme: ctx.theme };
    widget.render(frame, area);
}

fn render_body(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let widget = UserDirectoryWidget {
        view: &ctx.directory,
        search_active: ctx.search_active,
        keys: ctx.directory_keys,
        theme: ctx.theme,
    };
    widget.render(frame, area);

    if let Some(lines) = ctx.app_logs {
        let widget = AppLogsWidget { lines, theme: ctx.theme };
        widget.render(frame, area);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let widget = StatusBarWidget { mode: ctx.mode_name, hints: ctx.hints, endpoint: ctx.endpoint, theme: ctx.theme };
    widget.render(frame, area);
}

#[cfg(test)]
mod tests;

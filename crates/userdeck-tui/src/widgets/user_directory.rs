use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use userdeck_core::{DirectoryView, ResultsView, UserRecord};

use crate::theme::Theme;

const TITLE: &str = " Users from API ";
const SEARCH_PLACEHOLDER: &str = "Search by name or email...";

/// Key labels shown next to the directory's interactive controls.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryKeys<'a> {
    pub search: Option<&'a str>,
    pub prev: Option<&'a str>,
    pub next: Option<&'a str>,
    pub retry: Option<&'a str>,
}

pub struct UserDirectoryWidget<'a> {
    pub view: &'a DirectoryView<'a>,
    pub search_active: bool,
    pub keys: DirectoryKeys<'a>,
    pub theme: &'a Theme,
}

impl<'a> UserDirectoryWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let border = if self.search_active { t.border_active } else { t.border };
        let block = Block::default()
            .title(TITLE)
            .title_style(Style::default().fg(t.accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(border)
            .style(Style::default().bg(t.bg));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.view {
            DirectoryView::Idle | DirectoryView::Loading => self.render_loading(frame, inner),
            DirectoryView::Failed { message } => self.render_error(frame, inner, message),
            DirectoryView::Ready(results) => self.render_results(frame, inner, results),
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let [middle] = Layout::vertical([Constraint::Length(1)]).flex(Flex::Center).areas(area);
        let loading = Paragraph::new("Loading users...").style(self.theme.text_dim).alignment(Alignment::Center);
        frame.render_widget(loading, middle);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let t = self.theme;
        let retry_key = self.keys.retry.unwrap_or("r");
        let lines = vec![
            Line::styled(format!("Error: {message}"), t.error.add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("[{retry_key}]"), Style::default().fg(t.accent).add_modifier(Modifier::BOLD)),
                Span::styled(" Retry", Style::default().fg(t.fg)),
            ]),
        ];
        let height = (lines.len() as u16).min(area.height);
        let [middle] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, results: &ResultsView) {
        let [search_area, _, list_area, pagination_area, summary_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_search(frame, search_area, results.search);
        self.render_list(frame, list_area, &results.page_items);
        if results.show_pagination() {
            self.render_pagination(frame, pagination_area, results);
        }

        let summary = Paragraph::new(results.summary()).style(self.theme.text_dim).alignment(Alignment::Center);
        frame.render_widget(summary, summary_area);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, term: &str) {
        let t = self.theme;
        let mut spans = Vec::new();
        if let Some(key) = self.keys.search {
            spans.push(Span::styled(format!("[{key}] "), Style::default().fg(t.accent)));
        }

        if term.is_empty() && !self.search_active {
            spans.push(Span::styled(SEARCH_PLACEHOLDER, t.text_dim));
        } else {
            spans.push(Span::styled("Search: ", t.text_dim));
            spans.push(Span::styled(term, Style::default().fg(t.fg).add_modifier(Modifier::BOLD)));
            if self.search_active {
                spans.push(Span::styled("█", Style::default().fg(t.accent)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, users: &[&UserRecord]) {
        let t = self.theme;
        if users.is_empty() {
            let empty = Paragraph::new("No users found").style(t.text_dim).alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let mut lines = Vec::with_capacity(users.len() * 2);
        for user in users {
            lines.push(Line::styled(
                format!(" {}", user.name),
                Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(format!("   {} · {} · {}", user.email, user.phone, user.website), t.text_dim));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_pagination(&self, frame: &mut Frame, area: Rect, results: &ResultsView) {
        let t = self.theme;
        let enabled = Style::default().fg(t.accent).add_modifier(Modifier::BOLD);
        let prev_style = if results.has_prev() { enabled } else { t.disabled };
        let next_style = if results.has_next() { enabled } else { t.disabled };
        let prev_key = self.keys.prev.unwrap_or("←");
        let next_key = self.keys.next.unwrap_or("→");

        let line = Line::from(vec![
            Span::styled(format!("[{prev_key}] Previous"), prev_style),
            Span::styled(format!("   {}   ", results.page_label()), Style::default().fg(t.fg)),
            Span::styled(format!("Next [{next_key}]"), next_style),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;

/// Overlay docked to the bottom of the body showing the tail of the app log.
pub struct AppLogsWidget<'a> {
    pub lines: &'a [String],
    pub theme: &'a Theme,
}

impl<'a> AppLogsWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let height = (area.height * 2 / 5).max(5).min(area.height);
        let popup = Rect { x: area.x, y: area.y + area.height - height, width: area.width, height };

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_active)
            .title(" App Logs ")
            .title_style(Style::default().fg(t.accent).bold())
            .style(Style::default().bg(t.bg));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        if self.lines.is_empty() {
            frame.render_widget(Paragraph::new("No app logs yet").style(t.text_dim), inner);
            return;
        }

        let visible = inner.height as usize;
        let skip = self.lines.len().saturating_sub(visible);
        let text: Vec<Line> = self.lines[skip..].iter().map(|l| Line::raw(l.as_str())).collect();
        frame.render_widget(Paragraph::new(text).style(Style::default().fg(t.fg)), inner);
    }
}

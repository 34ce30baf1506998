use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub struct NavbarWidget<'a> {
    pub title: &'a str,
    pub sections: &'a [&'a str],
    pub toggle_theme_key: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> NavbarWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let header_bg = t.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![Span::styled(
            format!(" {} ", self.title),
            Style::default().fg(t.accent).bg(header_bg).add_modifier(Modifier::BOLD),
        )];
        for section in self.sections {
            spans.push(Span::styled(" │ ", t.border.bg(header_bg)));
            spans.push(Span::styled(*section, t.header));
        }

        // Label names the mode the toggle switches to.
        let target = if t.mode.is_dark() { "☀ Light" } else { "☾ Dark" };
        let right_text = match self.toggle_theme_key {
            Some(key) => format!("<{key}> {target} "),
            None => format!("{target} "),
        };
        let right_width = Span::raw(right_text.as_str()).width() as u16;
        let left_used: u16 = spans.iter().map(|s| s.width() as u16).sum();
        let fill = area.width.saturating_sub(left_used + right_width);
        if fill > 0 {
            spans.push(Span::styled(" ".repeat(fill as usize), Style::default().bg(header_bg)));
        }
        spans.push(Span::styled(right_text, t.header));

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(header_bg));
        frame.render_widget(bar, area);
    }
}

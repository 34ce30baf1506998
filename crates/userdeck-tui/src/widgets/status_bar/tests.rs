use super::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render_status_bar(mode: &str, hints: &[(String, String)], endpoint: Option<&str>, width: u16) -> String {
    let theme = Theme::default();
    let backend = TestBackend::new(width, 1);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            let widget = StatusBarWidget { mode, hints, endpoint, theme: &theme };
            widget.render(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn shows_hints() {
    let hints = vec![("/".into(), "Search".into()), ("R".into(), "Retry".into())];
    let text = render_status_bar("Normal", &hints, Some("https://example.org/users"), 120);
    assert!(text.contains("NORMAL"));
    assert!(text.contains("</>"));
    assert!(text.contains("Search"));
    assert!(text.contains("<R>"));
    assert!(text.contains("Retry"));
}

#[test]
fn shows_endpoint() {
    let text = render_status_bar("Normal", &[], Some("http://localhost:3000/users"), 80);
    assert!(text.contains("http://localhost:3000/users"));
}

#[test]
fn shows_offline_without_endpoint() {
    let text = render_status_bar("Normal", &[], None, 80);
    assert!(text.contains("offline"));
}

#[test]
fn mode_label_is_uppercased() {
    let text = render_status_bar("Search", &[], None, 80);
    assert!(text.contains("SEARCH"));
}

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use userdeck_core::{DirectoryState, UserRecord};

use super::*;

fn user(n: u64) -> UserRecord {
    UserRecord {
        id: n,
        name: format!("U{n}"),
        email: format!("u{n}@x"),
        phone: String::new(),
        website: String::new(),
    }
}

fn draw(state: &DirectoryState, app_logs: Option<&[String]>) -> String {
    let theme = Theme::default();
    let hints = vec![("/".to_string(), "Search".to_string()), ("Q".to_string(), "Quit".to_string())];
    let backend = TestBackend::new(90, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let ctx = RenderContext {
                directory: state.view(),
                search_active: false,
                directory_keys: DirectoryKeys::default(),
                app_logs,
                endpoint: Some("http://127.0.0.1:9/users"),
                mode_name: "Normal",
                hints: &hints,
                toggle_theme_key: Some("T"),
                theme: &theme,
            };
            render_root(frame, &ctx);
        })
        .unwrap();
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn root_renders_chrome_and_directory() {
    let mut state = DirectoryState::new();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok((1..=7).map(user).collect()));

    let text = draw(&state, None);
    assert!(text.contains("userdeck"));
    assert!(text.contains("Users from API"));
    assert!(text.contains("Page 1 of 2"));
    assert!(text.contains("Showing 5 of 7 users"));
    assert!(text.contains("NORMAL"));
    assert!(text.contains("http://127.0.0.1:9/users"));
    assert!(!text.contains("App Logs"));
}

#[test]
fn default_keys_use_arrow_labels() {
    let mut state = DirectoryState::new();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok((1..=7).map(user).collect()));

    let text = draw(&state, None);
    assert!(text.contains("[←] Previous"));
    assert!(text.contains("Next [→]"));
}

#[test]
fn app_logs_overlay_is_drawn_when_open() {
    let mut state = DirectoryState::new();
    state.begin_fetch();
    let lines = vec!["INFO fetching users".to_string()];

    let text = draw(&state, Some(&lines));
    assert!(text.contains("App Logs"));
    assert!(text.contains("INFO fetching users"));
    assert!(text.contains("Loading users..."));
}

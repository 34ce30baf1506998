use super::InputMode;
use crate::command::Command;

pub(super) fn global_command_from_name(name: &str) -> Option<Command> {
    match name {
        "quit" => Some(Command::Quit),
        "toggle_theme" => Some(Command::ToggleTheme),
        "app_logs" => Some(Command::ToggleAppLogs),
        _ => None,
    }
}

pub(super) fn global_command_description(name: &str) -> String {
    match name {
        "quit" => "Quit",
        "toggle_theme" => "Theme",
        "app_logs" => "App logs",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn browse_command_from_name(name: &str) -> Option<Command> {
    match name {
        "search" => Some(Command::EnterMode(InputMode::Search)),
        "prev_page" => Some(Command::PrevPage),
        "next_page" => Some(Command::NextPage),
        "retry" => Some(Command::Retry),
        "clear_search" => Some(Command::ClearSearch),
        _ => None,
    }
}

pub(super) fn browse_command_description(name: &str) -> String {
    match name {
        "search" => "Search",
        "prev_page" => "Prev page",
        "next_page" => "Next page",
        "retry" => "Retry",
        "clear_search" => "Clear search",
        _ => "Unknown",
    }
    .into()
}

pub use crate::keybindings::InputMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    ToggleTheme,
    ToggleAppLogs,
    EnterMode(InputMode),
    ExitMode,

    // Directory
    NextPage,
    PrevPage,
    Retry,
    ClearSearch,

    // Search input
    SearchInput(char),
    SearchBackspace,
}

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use userdeck_config::KeybindingsConfig;

use crate::command::Command;

mod commands;
mod parsing;

pub use parsing::parse_key_string;

use commands::{browse_command_description, browse_command_from_name, global_command_description, global_command_from_name};
use parsing::{format_key_display, normalize_key_event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

pub struct KeybindingDispatcher {
    mode: InputMode,
    global_bindings: HashMap<KeyEvent, Command>,
    browse_bindings: HashMap<KeyEvent, Command>,
    reverse_global: Vec<(String, String, String)>,
    reverse_browse: Vec<(String, String, String)>,
}

impl KeybindingDispatcher {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let mut global_bindings = HashMap::new();
        let mut reverse_global = Vec::new();
        for (name, key_str) in &config.global {
            if let Some(cmd) = global_command_from_name(name) {
                if let Some(key) = parse_key_string(key_str) {
                    global_bindings.insert(key, cmd);
                    reverse_global.push((name.clone(), key_str.clone(), global_command_description(name)));
                }
            }
        }

        let mut browse_bindings = HashMap::new();
        let mut reverse_browse = Vec::new();
        for (name, key_str) in &config.browse {
            if let Some(cmd) = browse_command_from_name(name) {
                if let Some(key) = parse_key_string(key_str) {
                    browse_bindings.insert(key, cmd);
                    reverse_browse.push((name.clone(), key_str.clone(), browse_command_description(name)));
                }
            }
        }

        Self { mode: InputMode::Normal, global_bindings, browse_bindings, reverse_global, reverse_browse }
    }

    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        let key = normalize_key_event(key);

        if self.mode == InputMode::Search {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => return Some(Command::ExitMode),
                KeyCode::Backspace => return Some(Command::SearchBackspace),
                KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                    return Some(Command::SearchInput(c));
                }
                _ => {}
            }
        }

        if let Some(cmd) = self.global_bindings.get(&key) {
            return Some(cmd.clone());
        }

        match self.mode {
            InputMode::Normal => self.browse_bindings.get(&key).cloned(),
            // Only the clear binding reaches the directory while text is being typed.
            InputMode::Search => self.browse_bindings.get(&key).filter(|cmd| **cmd == Command::ClearSearch).cloned(),
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn key_for(&self, name: &str) -> Option<String> {
        self.reverse_global
            .iter()
            .chain(&self.reverse_browse)
            .find(|(n, _, _)| n == name)
            .map(|(_, key_str, _)| format_key_display(key_str))
    }

    pub fn global_shortcuts(&self) -> Vec<(String, String)> {
        self.reverse_global.iter().map(|(_, key_str, desc)| (format_key_display(key_str), desc.clone())).collect()
    }

    pub fn browse_shortcuts(&self) -> Vec<(String, String)> {
        self.reverse_browse.iter().map(|(_, key_str, desc)| (format_key_display(key_str), desc.clone())).collect()
    }
}

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub global: IndexMap<String, String>,
    #[serde(default)]
    pub browse: IndexMap<String, String>,
}

impl KeybindingsConfig {
    fn group_entries(&self) -> [(&str, &IndexMap<String, String>); 2] {
        [("global", &self.global), ("browse", &self.browse)]
    }
}

pub fn validate_keybindings(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut errors = Vec::new();
    for (group, map) in config.group_entries() {
        for (name, key_str) in map {
            if let Err(e) = validate_key_string(key_str) {
                errors.push((group.to_string(), name.clone(), e));
            }
        }
    }
    errors
}

pub fn check_collisions(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut collisions = Vec::new();
    for (group, map) in config.group_entries() {
        for key_str in map.values() {
            let normalized = key_str.trim().to_ascii_lowercase();
            if let Some(prev_group) = seen.get(&normalized) {
                collisions.push((key_str.clone(), prev_group.clone(), group.to_string()));
            } else {
                seen.insert(normalized, group.to_string());
            }
        }
    }
    collisions
}

fn validate_key_string(s: &str) -> Result<(), String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("empty key string".to_string());
    }
    let parts: Vec<&str> = trimmed.split('+').collect();
    if parts.len() == 1 {
        validate_key_part(parts[0])?;
        return Ok(());
    }
    for &modifier in &parts[..parts.len() - 1] {
        match modifier.to_ascii_lowercase().as_str() {
            "alt" | "ctrl" | "shift" => {}
            other => return Err(format!("unknown modifier: {other}")),
        }
    }
    validate_key_part(parts[parts.len() - 1])
}

fn validate_key_part(s: &str) -> Result<(), String> {
    let lower = s.to_ascii_lowercase();
    match lower.as_str() {
        "tab" | "enter" | "esc" | "backspace" | "delete" | "up" | "down" | "left" | "right" | "home" | "end"
        | "pageup" | "pagedown" | "space" => Ok(()),
        _ if s.chars().count() == 1 => Ok(()),
        f if f.starts_with('f') => f[1..].parse::<u8>().map(|_| ()).map_err(|_| format!("invalid function key: {s}")),
        _ => Err(format!("unrecognized key: {s}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_catches_bad_key_string() {
        let mut config = KeybindingsConfig::default();
        config.global.insert("quit".into(), "notakey+combo+bad".into());
        config.global.insert("toggle_theme".into(), "t".into());

        let errors = validate_keybindings(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "global");
        assert_eq!(errors[0].1, "quit");
    }

    #[test]
    fn validate_accepts_valid_keys() {
        let mut config = KeybindingsConfig::default();
        config.global.insert("quit".into(), "ctrl+q".into());
        config.browse.insert("next_page".into(), "right".into());
        config.browse.insert("search".into(), "/".into());
        config.browse.insert("retry".into(), "f5".into());

        let errors = validate_keybindings(&config);
        assert!(errors.is_empty());
    }

    #[test]
    fn validate_rejects_empty_and_unknown_modifier() {
        let mut config = KeybindingsConfig::default();
        config.browse.insert("retry".into(), "  ".into());
        config.browse.insert("search".into(), "meta+s".into());

        let errors = validate_keybindings(&config);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].2, "empty key string");
        assert_eq!(errors[1].2, "unknown modifier: meta");
    }

    #[test]
    fn check_collisions_detects_duplicates() {
        let mut config = KeybindingsConfig::default();
        config.global.insert("quit".into(), "r".into());
        config.browse.insert("retry".into(), "R".into());

        let collisions = check_collisions(&config);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].0, "R");
        assert_eq!(collisions[0].1, "global");
        assert_eq!(collisions[0].2, "browse");
    }

    #[test]
    fn check_collisions_none_when_unique() {
        let mut config = KeybindingsConfig::default();
        config.global.insert("quit".into(), "q".into());
        config.browse.insert("next_page".into(), "right".into());

        let collisions = check_collisions(&config);
        assert!(collisions.is_empty());
    }
}

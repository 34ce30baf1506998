use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn normalize_key_event(key: KeyEvent) -> KeyEvent {
    if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
        let mut modifiers = key.modifiers;
        modifiers -= KeyModifiers::SHIFT;
        return KeyEvent::new(KeyCode::BackTab, modifiers);
    }
    if key.code == KeyCode::BackTab && key.modifiers.contains(KeyModifiers::SHIFT) {
        let mut modifiers = key.modifiers;
        modifiers -= KeyModifiers::SHIFT;
        return KeyEvent::new(KeyCode::BackTab, modifiers);
    }
    // Terminals report Shift+letter either as the uppercase char alone or with SHIFT.
    // Canonicalize to uppercase char + SHIFT.
    if let KeyCode::Char(c) = key.code {
        // Ctrl+Shift+<letter> is indistinguishable from Ctrl+<letter> in most terminals.
        if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() {
            let mut modifiers = key.modifiers;
            modifiers -= KeyModifiers::SHIFT;
            return KeyEvent::new(KeyCode::Char(c.to_ascii_lowercase()), modifiers);
        }
        if c.is_ascii_lowercase() && key.modifiers.contains(KeyModifiers::SHIFT) {
            return KeyEvent::new(KeyCode::Char(c.to_ascii_uppercase()), key.modifiers);
        }
        if c.is_ascii_uppercase() && !key.modifiers.contains(KeyModifiers::SHIFT) {
            return KeyEvent::new(key.code, key.modifiers | KeyModifiers::SHIFT);
        }
    }
    // Strip kind/state so parsed bindings and live events hash the same.
    KeyEvent::new(key.code, key.modifiers)
}

pub(super) fn format_key_display(key_str: &str) -> String {
    match key_str.trim().to_ascii_lowercase().as_str() {
        "left" => return "←".into(),
        "right" => return "→".into(),
        "up" => return "↑".into(),
        "down" => return "↓".into(),
        _ => {}
    }
    key_str
        .split('+')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let trimmed = s.trim();
    let parts: Vec<&str> = trimmed.split('+').collect();

    let mut modifiers = KeyModifiers::NONE;

    let key_part_raw = if parts.len() == 1 {
        parts[0]
    } else {
        for &modifier in &parts[..parts.len() - 1] {
            match modifier.to_ascii_lowercase().as_str() {
                "alt" => modifiers |= KeyModifiers::ALT,
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        parts[parts.len() - 1]
    };

    let key_lower = key_part_raw.to_ascii_lowercase();
    let mut single = key_part_raw.chars();
    let code = match (key_lower.as_str(), single.next(), single.next()) {
        ("tab", _, _) if modifiers.contains(KeyModifiers::SHIFT) => {
            modifiers -= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        ("tab", _, _) => KeyCode::Tab,
        ("enter", _, _) => KeyCode::Enter,
        ("esc", _, _) => KeyCode::Esc,
        ("backspace", _, _) => KeyCode::Backspace,
        ("delete", _, _) => KeyCode::Delete,
        ("up", _, _) => KeyCode::Up,
        ("down", _, _) => KeyCode::Down,
        ("left", _, _) => KeyCode::Left,
        ("right", _, _) => KeyCode::Right,
        ("home", _, _) => KeyCode::Home,
        ("end", _, _) => KeyCode::End,
        ("pageup", _, _) => KeyCode::PageUp,
        ("pagedown", _, _) => KeyCode::PageDown,
        ("space", _, _) => KeyCode::Char(' '),
        (_, Some(ch), None) => {
            if ch.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::Char(ch)
            } else if modifiers.contains(KeyModifiers::SHIFT) && ch.is_ascii_lowercase() {
                KeyCode::Char(ch.to_ascii_uppercase())
            } else {
                KeyCode::Char(ch)
            }
        }
        (s, _, _) if s.starts_with('f') => {
            let n: u8 = s[1..].parse().ok()?;
            KeyCode::F(n)
        }
        _ => return None,
    };

    let parsed = KeyEvent::new(code, modifiers);
    Some(normalize_key_event(parsed))
}

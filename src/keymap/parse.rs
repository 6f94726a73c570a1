//! Parsing of key strings like `"Ctrl+Shift+ArrowLeft"` into [`KeyPress`]es.

use super::types::{KeyPress, Modifiers};

/// Errors from parsing key strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    Empty,
    InvalidKey(String),
}

impl std::fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyParseError::Empty => write!(f, "Empty key string"),
            KeyParseError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
        }
    }
}

impl std::error::Error for KeyParseError {}

/// Parse a key string like "ctrl+shift+left" into a KeyPress.
///
/// Modifier names are case-insensitive. The key itself is normalized to
/// the DOM key name (`left` becomes `ArrowLeft`, `space` becomes `" "`);
/// single characters are kept as written. A trailing `++` means the `+` key.
pub fn parse_key_string(key_str: &str) -> Result<KeyPress, KeyParseError> {
    let trimmed = key_str.trim();
    if trimmed.is_empty() {
        return Err(KeyParseError::Empty);
    }

    let (chord, plus_key) = match trimmed.strip_suffix("++") {
        Some(rest) => (rest, true),
        None if trimmed == "+" => ("", true),
        None => (trimmed, false),
    };

    let mut mods = Modifiers::NONE;
    let mut key_part: Option<String> = plus_key.then(|| "+".to_string());

    for part in chord.split('+').filter(|p| !p.is_empty()) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "cmd" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                if key_part.is_some() {
                    return Err(KeyParseError::InvalidKey(format!(
                        "Multiple keys in {}",
                        key_str
                    )));
                }
                key_part = Some(normalize_key_name(part)?);
            }
        }
    }

    let key =
        key_part.ok_or_else(|| KeyParseError::InvalidKey(format!("No key found in {}", key_str)))?;

    Ok(KeyPress::new(key, mods))
}

/// Parse a comma-separated sequence such as `"Ctrl+A, Shift+ArrowLeft"`
pub fn parse_key_sequence(seq: &str) -> Result<Vec<KeyPress>, KeyParseError> {
    seq.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_key_string)
        .collect()
}

fn normalize_key_name(key: &str) -> Result<String, KeyParseError> {
    if key.chars().count() == 1 {
        return Ok(key.to_string());
    }

    let name = match key.to_lowercase().as_str() {
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "backspace" | "back" => "Backspace",
        "delete" | "del" => "Delete",
        "space" => " ",
        "up" | "arrowup" => "ArrowUp",
        "down" | "arrowdown" => "ArrowDown",
        "left" | "arrowleft" => "ArrowLeft",
        "right" | "arrowright" => "ArrowRight",
        "home" => "Home",
        "end" => "End",
        "pageup" | "pgup" => "PageUp",
        "pagedown" | "pgdn" => "PageDown",
        lower if lower.starts_with('f') && lower[1..].parse::<u8>().is_ok() => {
            return Ok(key.to_uppercase());
        }
        _ => return Err(KeyParseError::InvalidKey(key.to_string())),
    };
    Ok(name.to_string())
}

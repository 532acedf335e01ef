//! Type-safe key bindings for scroll navigation.
//!
//! A [`Binding`] groups one or more [`KeyPress`] values under a single action
//! together with the help text shown for it. Components expose their bindings
//! through the [`KeyMap`] trait so help views can list them.
//!
//! ```rust
//! use bubbletea_windowed_list::key::{Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let down = Binding::new(vec![
//!     KeyPress::from(KeyCode::Down),
//!     KeyPress::from(KeyCode::Char('j')),
//! ])
//! .with_help("↓/j", "down");
//!
//! let half_page: KeyPress = "ctrl+d".parse().unwrap();
//! assert_eq!(half_page, KeyPress::from((KeyCode::Char('d'), KeyModifiers::CONTROL)));
//! assert_eq!(down.help().key, "↓/j");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use std::str::FromStr;
use thiserror::Error;

/// A single key combination: a key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Returns true if the key message is this key press.
    ///
    /// Shift is ignored for character keys, since terminals disagree on whether
    /// an upper-case letter carries the shift modifier.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if msg.key != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                msg.modifiers.difference(KeyModifiers::SHIFT)
                    == self.mods.difference(KeyModifiers::SHIFT)
            }
            _ => msg.modifiers == self.mods,
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Errors produced when parsing a key press from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The input was empty or only contained separators.
    #[error("empty key binding")]
    Empty,
    /// A modifier segment was not one of `ctrl`, `alt` or `shift`.
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    /// The final segment did not name a key.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

impl FromStr for KeyPress {
    type Err = KeyParseError;

    /// Parses strings such as `"j"`, `"pgdn"`, `"ctrl+u"` or `"alt+shift+up"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }
        // "+" on its own (or as the last segment) is the plus key.
        let (prefix, key) = match s.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None if s == "+" => ("", "+"),
            None => match s.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", s),
            },
        };
        if key.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut mods = KeyModifiers::NONE;
        for part in prefix.split('+').filter(|p| !p.is_empty()) {
            mods |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(KeyParseError::UnknownModifier(part.to_string())),
            };
        }

        let mut code =
            parse_key_code(key).ok_or_else(|| KeyParseError::UnknownKey(key.to_string()))?;
        // Terminals report shifted letters as the upper-case character.
        if mods.contains(KeyModifiers::SHIFT) {
            if let KeyCode::Char(ch) = code {
                let mut upper = ch.to_uppercase();
                if let (Some(up), None) = (upper.next(), upper.next()) {
                    code = KeyCode::Char(up);
                }
            }
        }
        Ok(Self { code, mods })
    }
}

fn parse_key_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(ch));
    }
    let code = match name.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pgdown" | "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        _ => return None,
    };
    Some(code)
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A named action triggered by any of several key presses.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the binding with `disabled` applied.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Replaces the key presses.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if the message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Returns true if the message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Components that expose their key bindings for help rendering.
pub trait KeyMap {
    /// The handful of bindings worth showing in a one-line help bar.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key: code, modifiers }
    }

    #[test]
    fn test_parse_plain_and_named_keys() {
        assert_eq!("j".parse::<KeyPress>(), Ok(KeyPress::from(KeyCode::Char('j'))));
        assert_eq!("pgdn".parse::<KeyPress>(), Ok(KeyPress::from(KeyCode::PageDown)));
        assert_eq!("space".parse::<KeyPress>(), Ok(KeyPress::from(KeyCode::Char(' '))));
        assert_eq!("+".parse::<KeyPress>(), Ok(KeyPress::from(KeyCode::Char('+'))));
    }

    #[test]
    fn test_parse_modifiers() {
        let parsed: KeyPress = "ctrl+alt+up".parse().unwrap();
        assert_eq!(parsed.code, KeyCode::Up);
        assert_eq!(parsed.mods, KeyModifiers::CONTROL | KeyModifiers::ALT);

        let plus: KeyPress = "ctrl++".parse().unwrap();
        assert_eq!(plus, KeyPress::from((KeyCode::Char('+'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_parse_shift_letter_is_upper_case() {
        let parsed: KeyPress = "shift+g".parse().unwrap();
        assert_eq!(parsed.code, KeyCode::Char('G'));

        let b = Binding::new(vec![parsed]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Char('g'), KeyModifiers::NONE)));

        let digit: KeyPress = "shift+1".parse().unwrap();
        assert_eq!(digit.code, KeyCode::Char('1'));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<KeyPress>(), Err(KeyParseError::Empty));
        assert_eq!("ctrl+".parse::<KeyPress>(), Err(KeyParseError::Empty));
        assert_eq!(
            "hyper+j".parse::<KeyPress>(),
            Err(KeyParseError::UnknownModifier("hyper".to_string()))
        );
        assert_eq!(
            "f13".parse::<KeyPress>(),
            Err(KeyParseError::UnknownKey("f13".to_string()))
        );
    }

    #[test]
    fn test_binding_matches() {
        let b = Binding::new(vec![
            KeyPress::from(KeyCode::Down),
            KeyPress::from((KeyCode::Char('d'), KeyModifiers::CONTROL)),
        ]);
        assert!(b.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('d'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Down, KeyModifiers::ALT)));
    }

    #[test]
    fn test_char_keys_ignore_shift() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Up]).with_disabled(true);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Up, KeyModifiers::NONE)));

        b.set_enabled(true);
        assert!(matches(&key(KeyCode::Up, KeyModifiers::NONE), &[&b]));

        b.set_keys(Vec::<KeyPress>::new());
        assert!(!b.enabled());
    }
}

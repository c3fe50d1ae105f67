//! Keyboard input types.
//!
//! The picker reacts to a handful of keys: Enter opens it, Escape cancels,
//! and the vertical arrows nudge the number under the cursor in the values
//! field. Other keys are carried so that hosts can route them through the
//! same event type.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a key on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// A regular character key.
    Char(char),
    /// Escape key.
    Esc,
    /// Any key the picker has no use for.
    Null,
}

impl KeyCode {
    /// Returns the normalized name for this key code.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "escape".to_string(),
            KeyCode::Null => "null".to_string(),
        }
    }

    /// Returns the step direction for a vertical arrow key: `+1` for Up,
    /// `-1` for Down.
    #[must_use]
    pub fn vertical_step(&self) -> Option<i8> {
        match self {
            KeyCode::Up => Some(1),
            KeyCode::Down => Some(-1),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<crossterm::event::KeyCode> for KeyCode {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as CT;
        match code {
            CT::Backspace => KeyCode::Backspace,
            CT::Enter => KeyCode::Enter,
            CT::Left => KeyCode::Left,
            CT::Right => KeyCode::Right,
            CT::Up => KeyCode::Up,
            CT::Down => KeyCode::Down,
            CT::Home => KeyCode::Home,
            CT::End => KeyCode::End,
            CT::Tab => KeyCode::Tab,
            CT::Delete => KeyCode::Delete,
            CT::Char(c) => KeyCode::Char(c),
            CT::Esc => KeyCode::Esc,
            _ => KeyCode::Null,
        }
    }
}

bitflags! {
    /// Keyboard modifier flags.
    ///
    /// Multiple modifiers can be combined using bitwise OR. In TOML and JSON
    /// they are written as flag names joined by `|`, e.g. `"SHIFT | ALT"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct KeyModifiers: u8 {
        /// No modifiers pressed.
        const NONE = 0b0000_0000;
        /// Shift modifier. Multiplies nudge steps by ten.
        const SHIFT = 0b0000_0001;
        /// Control modifier.
        const CONTROL = 0b0000_0010;
        /// Alt/Option modifier. Redirects wheel input on the
        /// saturation/lightness square to saturation.
        const ALT = 0b0000_0100;
        /// Super/Windows/Command modifier.
        const SUPER = 0b0000_1000;
    }
}

impl fmt::Display for KeyModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

impl From<crossterm::event::KeyModifiers> for KeyModifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        let mut result = KeyModifiers::NONE;
        if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
            result |= KeyModifiers::SHIFT;
        }
        if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
            result |= KeyModifiers::CONTROL;
        }
        if mods.contains(crossterm::event::KeyModifiers::ALT) {
            result |= KeyModifiers::ALT;
        }
        if mods.contains(crossterm::event::KeyModifiers::SUPER) {
            result |= KeyModifiers::SUPER;
        }
        result
    }
}

/// A key press.
///
/// Only presses are modeled; the picker never reacts to key release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,
    /// Active modifiers during this event.
    #[serde(default)]
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Creates a new key event.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key event without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Returns true if the Alt modifier is pressed.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Returns true if the Shift modifier is pressed.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}+{}", self.modifiers, self.code)
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self {
            code: event.code.into(),
            modifiers: event.modifiers.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_name() {
        assert_eq!(KeyCode::Enter.name(), "enter");
        assert_eq!(KeyCode::Esc.name(), "escape");
        assert_eq!(KeyCode::Char('a').name(), "a");
    }

    #[test]
    fn test_vertical_step() {
        assert_eq!(KeyCode::Up.vertical_step(), Some(1));
        assert_eq!(KeyCode::Down.vertical_step(), Some(-1));
        assert_eq!(KeyCode::Left.vertical_step(), None);
    }

    #[test]
    fn test_modifiers_display() {
        assert_eq!(KeyModifiers::NONE.to_string(), "None");
        assert_eq!((KeyModifiers::SHIFT | KeyModifiers::ALT).to_string(), "Alt+Shift");
    }

    #[test]
    fn test_key_event_display() {
        assert_eq!(KeyEvent::plain(KeyCode::Up).to_string(), "up");
        assert_eq!(
            KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT).to_string(),
            "Shift+up"
        );
    }

    #[test]
    fn test_from_crossterm() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Down,
            crossterm::event::KeyModifiers::SHIFT,
        );
        let event = KeyEvent::from(ct);
        assert_eq!(event.code, KeyCode::Down);
        assert!(event.shift());
        assert!(!event.alt());

        let f1: KeyCode = crossterm::event::KeyCode::F(1).into();
        assert_eq!(f1, KeyCode::Null);
    }
}

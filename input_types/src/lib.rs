#![no_std]

//! # Input Types
//!
//! This crate defines the input event types shared by BrewEdit's editing
//! sessions and their hosts.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: Input is structured events, not raw scan codes or byte streams
//! - **Characters, not layouts**: Printable keys carry the character they produce,
//!   so sessions never translate key positions
//! - **Testable**: Events are serializable and can be injected for testing
//! - **Stable**: API is versioned and designed for evolution
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Raw hardware scan codes (PS/2, USB HID)
//! - POSIX terminals or stdin/stdout
//! - Keymap or keybinding configuration
//! - A complete input subsystem (just the types)

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Input event
///
/// Represents a single input event from any input device.
/// Currently supports keyboard only; pointer/touch reserved for future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Keyboard event
    Key(KeyEvent),
    // Reserved for future:
    // Pointer(PointerEvent),
    // Touch(TouchEvent),
}

impl InputEvent {
    /// Creates a key event
    pub fn key(event: KeyEvent) -> Self {
        Self::Key(event)
    }

    /// Returns true if this is a key event
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns the key event if this is a key event
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(event) => Some(event),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

/// Keyboard event
///
/// Represents a single keyboard state change (key press, release, or repeat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that was pressed/released
    pub code: KeyCode,
    /// Modifier keys that were active
    pub modifiers: Modifiers,
    /// Event state (pressed, released, repeat)
    pub state: KeyState,
    /// Optional text representation (for IME support, future)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(code: KeyCode, modifiers: Modifiers, state: KeyState) -> Self {
        Self {
            code,
            modifiers,
            state,
            text: None,
        }
    }

    /// Creates a key pressed event
    pub fn pressed(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Pressed)
    }

    /// Creates a key released event
    pub fn released(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Released)
    }

    /// Creates a key repeat event
    pub fn repeat(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Repeat)
    }

    /// Adds text to this key event (for IME support)
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns true if this is a press event
    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }

    /// Returns true if this is a release event
    pub fn is_released(&self) -> bool {
        self.state == KeyState::Released
    }

    /// Returns true if this is a repeat event
    pub fn is_repeat(&self) -> bool {
        self.state == KeyState::Repeat
    }
}

/// Key state
///
/// Represents whether a key was pressed, released, or is repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key was pressed down
    Pressed,
    /// Key was released
    Released,
    /// Key is auto-repeating
    Repeat,
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed => write!(f, "pressed"),
            Self::Released => write!(f, "released"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

/// Key code
///
/// Logical editing keys, not hardware scan codes. Printable keys arrive as
/// [`KeyCode::Char`] carrying the character the keyboard layer already
/// resolved; the named variants are the keys an editing session dispatches
/// on directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A printable character
    Char(char),

    // Editing keys
    Tab,
    Enter,
    Backspace,
    Delete,
    Space,
    Escape,

    // Cursor motion
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Unknown/unmapped key
    Unknown,
}

impl KeyCode {
    /// Returns the character for printable keys
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(ch) => Some(*ch),
            _ => None,
        }
    }
}

impl From<char> for KeyCode {
    fn from(ch: char) -> Self {
        Self::Char(ch)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Modifier keys
///
/// Bitflags representing modifier key states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self { bits: 0 };
    /// Control key
    pub const CTRL: Self = Self { bits: 1 << 0 };
    /// Alt key
    pub const ALT: Self = Self { bits: 1 << 1 };
    /// Shift key
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Meta/Super/Windows key
    pub const META: Self = Self { bits: 1 << 3 };

    /// Creates a new modifier set with no modifiers
    pub fn none() -> Self {
        Self::NONE
    }

    /// Creates a new modifier set from bits
    pub fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Returns the raw bits
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Adds a modifier
    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    /// Checks if a modifier is present
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Checks if Ctrl is pressed
    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Checks if Alt is pressed
    pub fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    /// Checks if Shift is pressed
    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Checks if Meta is pressed
    pub fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// Returns true if no modifiers are pressed
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut parts = Vec::new();
        if self.is_ctrl() {
            parts.push("Ctrl");
        }
        if self.is_alt() {
            parts.push("Alt");
        }
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_input_event_key() {
        let key_event = KeyEvent::pressed(KeyCode::Char('a'), Modifiers::none());
        let event = InputEvent::key(key_event.clone());

        assert!(event.is_key());
        assert_eq!(event.as_key(), Some(&key_event));
    }

    #[test]
    fn test_key_event_pressed() {
        let event = KeyEvent::pressed(KeyCode::Tab, Modifiers::CTRL);

        assert!(event.is_pressed());
        assert!(!event.is_released());
        assert!(!event.is_repeat());
        assert_eq!(event.code, KeyCode::Tab);
        assert!(event.modifiers.is_ctrl());
    }

    #[test]
    fn test_key_event_released() {
        let event = KeyEvent::released(KeyCode::Enter, Modifiers::none());

        assert!(!event.is_pressed());
        assert!(event.is_released());
        assert!(!event.is_repeat());
        assert_eq!(event.code, KeyCode::Enter);
    }

    #[test]
    fn test_key_event_repeat() {
        let event = KeyEvent::repeat(KeyCode::Backspace, Modifiers::SHIFT);

        assert!(!event.is_pressed());
        assert!(!event.is_released());
        assert!(event.is_repeat());
        assert!(event.modifiers.is_shift());
    }

    #[test]
    fn test_key_event_with_text() {
        let event = KeyEvent::pressed(KeyCode::Char('a'), Modifiers::none()).with_text("a");

        assert_eq!(event.text, Some("a".to_string()));
    }

    #[test]
    fn test_key_state_display() {
        assert_eq!(KeyState::Pressed.to_string(), "pressed");
        assert_eq!(KeyState::Released.to_string(), "released");
        assert_eq!(KeyState::Repeat.to_string(), "repeat");
    }

    #[test]
    fn test_char_keycode_carries_character() {
        assert_eq!(KeyCode::Char('x').char(), Some('x'));
        assert_eq!(KeyCode::Char('#').char(), Some('#'));
        assert_eq!(KeyCode::Tab.char(), None);
        assert_eq!(KeyCode::Enter.char(), None);
    }

    #[test]
    fn test_keycode_from_char() {
        assert_eq!(KeyCode::from('q'), KeyCode::Char('q'));
        assert_eq!(KeyCode::from('>'), KeyCode::Char('>'));
    }

    #[test]
    fn test_editing_keycodes_distinct() {
        let keys = vec![
            KeyCode::Tab,
            KeyCode::Enter,
            KeyCode::Backspace,
            KeyCode::Delete,
            KeyCode::Space,
            KeyCode::Escape,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::PageUp,
            KeyCode::PageDown,
            KeyCode::Unknown,
        ];

        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(keys[i], keys[j]);
            }
        }
    }

    #[test]
    fn test_modifiers_none() {
        let mods = Modifiers::none();
        assert!(mods.is_empty());
        assert!(!mods.is_ctrl());
        assert!(!mods.is_alt());
        assert!(!mods.is_shift());
        assert!(!mods.is_meta());
    }

    #[test]
    fn test_modifiers_single() {
        let mods = Modifiers::CTRL;
        assert!(!mods.is_empty());
        assert!(mods.is_ctrl());
        assert!(!mods.is_alt());
        assert!(!mods.is_shift());
        assert!(!mods.is_meta());
    }

    #[test]
    fn test_modifiers_combination() {
        let mods = Modifiers::CTRL.with(Modifiers::SHIFT);
        assert!(mods.is_ctrl());
        assert!(mods.is_shift());
        assert!(!mods.is_alt());
        assert!(!mods.is_meta());
    }

    #[test]
    fn test_modifiers_contains() {
        let mods = Modifiers::CTRL.with(Modifiers::SHIFT);
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
        assert!(mods.contains(Modifiers::CTRL.with(Modifiers::SHIFT)));
    }

    #[test]
    fn test_modifiers_display() {
        assert_eq!(Modifiers::none().to_string(), "none");
        assert_eq!(Modifiers::CTRL.to_string(), "Ctrl");
        assert_eq!(Modifiers::CTRL.with(Modifiers::ALT).to_string(), "Ctrl+Alt");
        assert_eq!(
            Modifiers::CTRL
                .with(Modifiers::SHIFT)
                .with(Modifiers::ALT)
                .to_string(),
            "Ctrl+Alt+Shift"
        );
    }

    #[test]
    fn test_key_event_serialization() {
        let event = KeyEvent::pressed(KeyCode::Tab, Modifiers::CTRL);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: KeyEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_char_keycode_serialization() {
        let code = KeyCode::Char('a');
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "{\"Char\":\"a\"}");

        let deserialized: KeyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, deserialized);
    }

    #[test]
    fn test_input_event_serialization() {
        let key_event = KeyEvent::pressed(KeyCode::Enter, Modifiers::none());
        let event = InputEvent::key(key_event);

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: InputEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_modifiers_serialization() {
        let mods = Modifiers::CTRL.with(Modifiers::SHIFT);
        let json = serde_json::to_string(&mods).unwrap();
        let deserialized: Modifiers = serde_json::from_str(&json).unwrap();

        assert_eq!(mods, deserialized);
    }

    #[test]
    fn test_key_event_equality() {
        let event1 = KeyEvent::pressed(KeyCode::Char('a'), Modifiers::CTRL);
        let event2 = KeyEvent::pressed(KeyCode::Char('a'), Modifiers::CTRL);
        let event3 = KeyEvent::pressed(KeyCode::Char('b'), Modifiers::CTRL);

        assert_eq!(event1, event2);
        assert_ne!(event1, event3);
    }

    #[test]
    fn test_modifiers_equality() {
        let mods1 = Modifiers::CTRL.with(Modifiers::SHIFT);
        let mods2 = Modifiers::SHIFT.with(Modifiers::CTRL);
        let mods3 = Modifiers::CTRL.with(Modifiers::ALT);

        assert_eq!(mods1, mods2);
        assert_ne!(mods1, mods3);
    }
}

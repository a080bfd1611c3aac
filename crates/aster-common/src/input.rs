//! Keyboard event types shared between the render host and the view layers.
//!
//! Events arrive from hosted web content as raw key phases with normalized
//! key names ("Escape", "W", "F5") and a modifier bundle, and pass through
//! two shortcut tiers: a high-priority pre-handling pass before the page
//! sees the event, and a lower-priority pass after the page declined it.

use serde::{Deserialize, Serialize};

/// Raw keyboard event phase, as reported by the render host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEventKind {
    RawKeyDown,
    KeyUp,
    Char,
}

/// Modifier key state bundled with each key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

/// A keyboard event delivered from hosted web content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    /// Normalized key name (e.g. "Escape", "W", "F5").
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn raw_key_down(key: impl Into<String>) -> Self {
        Self {
            kind: KeyEventKind::RawKeyDown,
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        Self {
            kind: KeyEventKind::KeyUp,
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether this is the Escape press that closes popup surfaces.
    /// Modifiers are not consulted; only the phase and key matter.
    pub fn is_escape_press(&self) -> bool {
        self.kind == KeyEventKind::RawKeyDown && self.key == "Escape"
    }
}

/// Outcome of the high-priority keyboard pre-handling pass.
///
/// `is_shortcut` keeps the event away from the page's default handling;
/// `consumed` means pre-handling finished with it. A shortcut can be
/// flagged but left unconsumed, deferring the action to the main pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortcutCheck {
    pub consumed: bool,
    pub is_shortcut: bool,
}

impl ShortcutCheck {
    /// Nothing matched; the page gets the event.
    pub fn not_a_shortcut() -> Self {
        Self::default()
    }

    /// Flagged as a shortcut, but acted on during the main handling pass.
    pub fn deferred_shortcut() -> Self {
        Self {
            consumed: false,
            is_shortcut: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_key_down_constructor() {
        let event = KeyEvent::raw_key_down("W");
        assert_eq!(event.kind, KeyEventKind::RawKeyDown);
        assert_eq!(event.key, "W");
        assert_eq!(event.modifiers, Modifiers::default());
    }

    #[test]
    fn with_modifiers() {
        let event = KeyEvent::raw_key_down("W").with_modifiers(Modifiers {
            ctrl: true,
            ..Default::default()
        });
        assert!(event.modifiers.ctrl);
        assert!(!event.modifiers.alt);
    }

    #[test]
    fn escape_press_detected() {
        assert!(KeyEvent::raw_key_down("Escape").is_escape_press());
    }

    #[test]
    fn escape_release_is_not_a_press() {
        assert!(!KeyEvent::key_up("Escape").is_escape_press());
    }

    #[test]
    fn other_key_is_not_escape() {
        assert!(!KeyEvent::raw_key_down("Enter").is_escape_press());
    }

    #[test]
    fn modified_escape_still_counts() {
        let event = KeyEvent::raw_key_down("Escape").with_modifiers(Modifiers {
            shift: true,
            ..Default::default()
        });
        assert!(event.is_escape_press());
    }

    #[test]
    fn shortcut_check_constructors() {
        let none = ShortcutCheck::not_a_shortcut();
        assert!(!none.consumed);
        assert!(!none.is_shortcut);

        let deferred = ShortcutCheck::deferred_shortcut();
        assert!(!deferred.consumed);
        assert!(deferred.is_shortcut);
    }

    #[test]
    fn key_event_serialization() {
        let event = KeyEvent::raw_key_down("F5").with_modifiers(Modifiers {
            ctrl: true,
            shift: true,
            ..Default::default()
        });
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: KeyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}

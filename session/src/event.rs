//! Events delivered by a window host to the session.

use bitflags::bitflags;

/// Physical keys the session reacts to.
///
/// Keys are identified by position, not by the character the layout produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// The key in the `C` position.
    C,
    /// The key in the `V` position.
    V,
    /// Any other key.
    Other,
}

/// What happened to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The key went down.
    Press,
    /// The key went up.
    Release,
    /// The key is held and the platform generated a repeat.
    Repeat,
}

bitflags! {
    /// Modifier keys held while a key event occurred.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Either Shift key.
        const SHIFT = 1 << 0;
        /// Either Control key.
        const CONTROL = 1 << 1;
        /// Either Alt/Option key.
        const ALT = 1 << 2;
        /// Either Super/Command/Windows key.
        const SUPER = 1 << 3;
    }
}

/// A single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key involved.
    pub key: Key,
    /// Press, release or repeat.
    pub action: Action,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers.
    #[must_use]
    pub const fn press(key: Key) -> Self {
        Self {
            key,
            action: Action::Press,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the action.
    #[must_use]
    pub const fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Whether Control is held, with or without other modifiers.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
    }
}

/// Everything a window host can report to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A keyboard transition.
    Key(KeyEvent),
    /// The window's drawable area changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// The user asked to close the window.
    CloseRequest,
}

impl From<KeyEvent> for SessionEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_ignores_extra_modifiers() {
        let event = KeyEvent::press(Key::C).with_modifiers(Modifiers::CONTROL | Modifiers::SHIFT);
        assert!(event.ctrl());
        assert!(!KeyEvent::press(Key::C).with_modifiers(Modifiers::SUPER).ctrl());
    }

    #[test]
    fn builders_keep_key() {
        let event = KeyEvent::press(Key::V).with_action(Action::Repeat);
        assert_eq!(event.key, Key::V);
        assert_eq!(event.action, Action::Repeat);
        assert!(event.modifiers.is_empty());
    }
}

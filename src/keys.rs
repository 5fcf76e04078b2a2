//! Keyboard types shared by editor events: Modifiers, ModifierKey, KeyCode

use serde::{Deserialize, Serialize};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether a single named modifier is held, ignoring the others
    #[inline]
    pub const fn has(self, key: ModifierKey) -> bool {
        self.contains(key.as_modifiers())
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// A single modifier key, as named in configuration files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    Ctrl,
    Shift,
    #[default]
    Alt,
    Meta,
}

impl ModifierKey {
    pub const fn as_modifiers(self) -> Modifiers {
        match self {
            ModifierKey::Ctrl => Modifiers::CTRL,
            ModifierKey::Shift => Modifiers::SHIFT,
            ModifierKey::Alt => Modifiers::ALT,
            ModifierKey::Meta => Modifiers::META,
        }
    }
}

/// A key code carried by key events
///
/// The middleware only looks at held modifiers, so hosts map anything
/// it has no name for to [`KeyCode::Char`] or leave the key off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    /// A modifier key pressed or released on its own
    Modifier(ModifierKey),

    Enter,
    Escape,
}

impl KeyCode {
    /// Create a character key, normalized to lowercase
    pub fn char(c: char) -> Self {
        KeyCode::Char(c.to_ascii_lowercase())
    }
}

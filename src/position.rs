//! Document positions and pointer coordinates
//!
//! A [`Pos`] is what the editor reports for a pointer location: a line, a
//! character offset, and which half of the character the pointer landed on.

use serde::{Deserialize, Serialize};

/// Which side of a character boundary a position sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Pointer hit the left half of the character at `ch`; the position is
    /// that character's left boundary
    Left,
    /// Pointer hit the right half of the character before `ch`, or landed
    /// past the end of the line
    #[default]
    Right,
}

/// A position in document space (0-indexed line and character)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub line: usize,
    pub ch: usize,
    #[serde(default)]
    pub side: Side,
}

impl Pos {
    pub const fn new(line: usize, ch: usize) -> Self {
        Self {
            line,
            ch,
            side: Side::Right,
        }
    }

    pub const fn with_side(line: usize, ch: usize, side: Side) -> Self {
        Self { line, ch, side }
    }

    /// The position one character further along the same line
    pub const fn next_char(self) -> Self {
        Self {
            line: self.line,
            ch: self.ch.saturating_add(1),
            side: self.side,
        }
    }
}

/// Pointer coordinates, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageCoords {
    pub left: f64,
    pub top: f64,
}

impl PageCoords {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Reference frame for pixel coordinates handed to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordSpace {
    /// Relative to the top-left of the whole (scrolled) page
    Page,
    /// Relative to the visible window
    Window,
    /// Relative to the editor's text area
    Local,
}

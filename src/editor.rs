//! The boundary between middleware and the native editor widget

use crate::position::{CoordSpace, PageCoords, Pos};
use crate::token::NativeToken;

/// Queries a middleware may run against the editor while handling an event
pub trait TextEditor {
    /// Token ending at or covering the character just before `pos.ch`.
    ///
    /// `precise` asks the editor to re-tokenize from the start of the
    /// document instead of using cached state.
    fn token_at(&self, pos: Pos, precise: bool) -> NativeToken;

    /// Convert pixel coordinates in `space` to a document position
    fn coords_char(&self, coords: PageCoords, space: CoordSpace) -> Pos;
}

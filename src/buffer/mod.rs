//! Reference text buffer implementing [`TextEditor`]
//!
//! Hosts that don't have a native widget (tests, headless tools) can drive
//! middleware against a [`TokenBuffer`]: rope-backed text, tokenized per
//! line on demand, laid out on a fixed-pitch grid.
//!
//! ## Token lookup
//!
//! Like the native widget, `token_at` reports the token that covers the
//! character *before* the position, so a position sitting on a token's
//! first character returns the previous token.

mod lexer;

use ropey::Rope;

use crate::editor::TextEditor;
use crate::position::{CoordSpace, PageCoords, Pos, Side};
use crate::token::NativeToken;

pub use lexer::{lex_line, Lexeme, LineSpan};

/// Fixed-pitch layout used to map pixels to positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    /// Page coordinates of the top-left corner of the text area
    pub origin: PageCoords,
    /// How far the page itself is scrolled (window → page offset)
    pub page_scroll: PageCoords,
    pub char_width: f64,
    pub line_height: f64,
    /// First visible line
    pub top_line: usize,
    /// First visible column
    pub left_column: usize,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            origin: PageCoords::default(),
            page_scroll: PageCoords::default(),
            char_width: 10.0,
            line_height: 20.0,
            top_line: 0,
            left_column: 0,
        }
    }
}

impl TextLayout {
    /// Convert coordinates in `space` to text-area-local pixels
    fn local_coords(&self, coords: PageCoords, space: CoordSpace) -> (f64, f64) {
        match space {
            CoordSpace::Local => (coords.left, coords.top),
            CoordSpace::Page => (coords.left - self.origin.left, coords.top - self.origin.top),
            CoordSpace::Window => (
                coords.left + self.page_scroll.left - self.origin.left,
                coords.top + self.page_scroll.top - self.origin.top,
            ),
        }
    }
}

/// A tokenized, laid-out text buffer
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    text: Rope,
    layout: TextLayout,
}

impl TokenBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            layout: TextLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut TextLayout {
        &mut self.layout
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = Rope::from_str(text);
    }

    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    /// Text of a line without its line ending
    pub fn line(&self, line: usize) -> Option<String> {
        if line >= self.text.len_lines() {
            return None;
        }
        let mut text = self.text.line(line).to_string();
        let trimmed_len = trim_line_ending(&text).len();
        text.truncate(trimmed_len);
        Some(text)
    }

    /// Length of a line in characters, excluding the line ending
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// All tokens on a line, in order
    pub fn tokens(&self, line: usize) -> Vec<NativeToken> {
        let Some(text) = self.line(line) else {
            return Vec::new();
        };
        lex_line(&text).iter().map(to_native).collect()
    }
}

impl TextEditor for TokenBuffer {
    fn token_at(&self, pos: Pos, _precise: bool) -> NativeToken {
        // Lines are always tokenized from scratch, so every lookup is precise
        let Some(text) = self.line(pos.line) else {
            return NativeToken::empty(0);
        };

        let ch = pos.ch.min(text.chars().count());
        if ch == 0 {
            return NativeToken::empty(0);
        }

        lex_line(&text)
            .iter()
            .find(|span| span.start < ch && ch <= span.end)
            .map(to_native)
            .unwrap_or_else(|| NativeToken::empty(ch))
    }

    fn coords_char(&self, coords: PageCoords, space: CoordSpace) -> Pos {
        let layout = &self.layout;
        let (x, y) = layout.local_coords(coords, space);

        let last_line = self.text.len_lines().saturating_sub(1);
        // Float-to-int casts saturate, so huge offsets or a zero pitch
        // land on usize::MAX and must not overflow the viewport offsets
        let visual_line = (y.max(0.0) / layout.line_height).floor() as usize;
        let line = layout.top_line.saturating_add(visual_line).min(last_line);
        let line_len = self.line_len(line);

        if x < 0.0 {
            return Pos::with_side(line, layout.left_column.min(line_len), Side::Left);
        }

        let column = layout.left_column as f64 + x / layout.char_width;
        let cell = column.floor() as usize;
        if cell >= line_len {
            return Pos::with_side(line, line_len, Side::Right);
        }

        if column - column.floor() < 0.5 {
            Pos::with_side(line, cell, Side::Left)
        } else {
            Pos::with_side(line, cell.saturating_add(1), Side::Right)
        }
    }
}

fn to_native(span: &LineSpan<'_>) -> NativeToken {
    NativeToken {
        start: span.start,
        end: span.end,
        string: span.text.to_string(),
        kind: span.style.map(str::to_string),
    }
}

/// Strip a trailing `\n`, `\r\n` or `\r`
fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

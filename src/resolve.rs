//! Position-to-token resolution

use crate::editor::TextEditor;
use crate::position::{Pos, Side};
use crate::token::Token;

/// Resolve the token under a pointer position.
///
/// The editor reports the token *before* a position, so a pointer on the
/// left half of a character identifies the previous token. When that token
/// is unclassified (typically whitespace) the character to the right is
/// queried instead, so a click right at the start of a literal still finds
/// the literal.
pub fn find_nearest_literal_token(editor: &dyn TextEditor, pos: Pos) -> Token {
    let token = token_at(editor, pos, false);
    if pos.side == Side::Left && !token.is_classified() {
        tracing::trace!(
            line = pos.line,
            ch = pos.ch,
            "unclassified token left of pointer, retrying at next char"
        );
        return token_at(editor, pos.next_char(), false);
    }
    token
}

fn token_at(editor: &dyn TextEditor, pos: Pos, precise: bool) -> Token {
    Token::from_native(&editor.token_at(pos, precise), pos.line)
}

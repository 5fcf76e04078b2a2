//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tokenbridge::{
    token_middleware, Action, DocumentId, EditorEvent, Middleware, Modifiers, TokenBuffer,
    TokenMiddleware,
};

/// Default layout of `TokenBuffer`
pub const CHAR_WIDTH: f64 = 10.0;
pub const LINE_HEIGHT: f64 = 20.0;

pub const DOC_ID: &str = "doc-1";

/// Sample source used across tests
///
/// ```text
/// 0: let answer = 42;        `42` at 13..15
/// 1: const name = "deco";    `"deco"` at 13..19
/// 2: let ok = true;          `true` at 9..13
/// 3: let none = null;        `null` at 11..15
/// ```
pub const SOURCE: &str = "let answer = 42;\nconst name = \"deco\";\nlet ok = true;\nlet none = null;";

pub type Recorded = Rc<RefCell<Vec<Action>>>;

/// Token middleware that records every dispatched action
pub fn recording_middleware() -> (TokenMiddleware, Recorded) {
    let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&recorded);
    let middleware = token_middleware(move |action: Action| sink.borrow_mut().push(action));
    (middleware, recorded)
}

/// Recording middleware attached to `DOC_ID`
pub fn attached_middleware() -> (TokenMiddleware, Recorded) {
    let (mut middleware, recorded) = recording_middleware();
    middleware.attach(Some(&DocumentId::new(DOC_ID)));
    (middleware, recorded)
}

pub fn source_buffer() -> TokenBuffer {
    TokenBuffer::new(SOURCE)
}

/// Page coordinates of the left half of character `ch` on `line`
pub fn left_half(line: usize, ch: usize) -> (f64, f64) {
    (
        ch as f64 * CHAR_WIDTH + 2.0,
        line as f64 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
    )
}

/// Page coordinates of the right half of character `ch` on `line`
pub fn right_half(line: usize, ch: usize) -> (f64, f64) {
    (
        ch as f64 * CHAR_WIDTH + 7.0,
        line as f64 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
    )
}

pub fn click(at: (f64, f64), modifiers: Modifiers) -> EditorEvent {
    EditorEvent::mouse_down(at.0, at.1, modifiers)
}

pub fn alt_click(at: (f64, f64)) -> EditorEvent {
    click(at, Modifiers::ALT)
}

/// Deliver `event` through the listener table, returning it for inspection
pub fn deliver(
    middleware: &mut TokenMiddleware,
    buffer: &TokenBuffer,
    mut event: EditorEvent,
) -> EditorEvent {
    tokenbridge::tracing::init_for_tests();
    assert!(middleware.handle_event(buffer, &mut event));
    event
}

pub fn take(recorded: &Recorded) -> Vec<Action> {
    recorded.borrow_mut().drain(..).collect()
}

//! tokenbridge - editor event middleware
//!
//! Sits between a text-editing widget and an application store. Raw editor
//! events (key presses, clicks, focus loss) go in; application actions come
//! out. The widget and the store never see each other.
//!
//! ```text
//! native event → EditorEvent → Middleware::handle_event → listener → dispatch(Action)
//! ```

pub mod actions;
pub mod buffer;
pub mod config;
pub mod config_paths;
pub mod editor;
pub mod event;
pub mod keys;
pub mod middleware;
pub mod position;
pub mod resolve;
pub mod token;
pub mod tracing;

// Re-export commonly used types
pub use actions::{Action, DocumentId};
pub use buffer::TokenBuffer;
pub use config::TokenMiddlewareConfig;
pub use editor::TextEditor;
pub use event::{EditorEvent, EventKind};
pub use keys::{KeyCode, ModifierKey, Modifiers};
pub use middleware::{token_middleware, DispatchFn, EventListeners, Middleware, TokenMiddleware};
pub use position::{CoordSpace, PageCoords, Pos, Side};
pub use token::{Token, TokenKind};

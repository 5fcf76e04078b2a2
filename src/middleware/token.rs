//! Token highlighting and click-to-select middleware
//!
//! Two independent behaviors:
//!
//! - Holding the modifier (Alt by default) turns token highlighting on;
//!   releasing any key or losing focus turns it off again.
//! - Modifier-clicking a string, number or boolean literal dispatches a
//!   selection of that token in the attached document.

use crate::actions::{
    disable_token_highlighting, enable_token_highlighting, select_token_range, Action,
    DocumentId,
};
use crate::config::TokenMiddlewareConfig;
use crate::editor::TextEditor;
use crate::event::{EditorEvent, EventKind};
use crate::keys::ModifierKey;
use crate::position::CoordSpace;
use crate::resolve::find_nearest_literal_token;

use super::{DispatchFn, Dispatcher, EventListeners, Middleware};

/// Mutable state owned by one middleware instance
#[derive(Debug, Clone, Default)]
struct TokenState {
    /// Document that selections are stamped with
    document: Option<DocumentId>,
    /// Last highlight transition this middleware emitted
    highlighting: bool,
}

/// Middleware for highlighting and clicking literal tokens
#[derive(Debug)]
pub struct TokenMiddleware {
    dispatcher: Dispatcher,
    listeners: EventListeners<Self>,
    state: TokenState,
    modifier: ModifierKey,
}

/// Create a token middleware with default settings, dispatching through
/// `dispatch`
pub fn token_middleware(dispatch: impl FnMut(Action) + 'static) -> TokenMiddleware {
    let mut middleware = TokenMiddleware::new(TokenMiddlewareConfig::default());
    middleware.set_dispatch_function(Box::new(dispatch));
    middleware
}

impl TokenMiddleware {
    pub fn new(config: TokenMiddlewareConfig) -> Self {
        Self {
            dispatcher: Dispatcher::default(),
            listeners: EventListeners::new()
                .on(EventKind::KeyUp, Self::key_up)
                .on(EventKind::KeyDown, Self::key_down)
                .on(EventKind::Blur, Self::blur)
                .on(EventKind::MouseDown, Self::mouse_down),
            state: TokenState::default(),
            modifier: config.modifier,
        }
    }

    pub fn modifier(&self) -> ModifierKey {
        self.modifier
    }

    /// Document currently attached, if any
    pub fn document(&self) -> Option<&DocumentId> {
        self.state.document.as_ref()
    }

    /// Whether the last emitted transition enabled highlighting
    pub fn is_highlighting(&self) -> bool {
        self.state.highlighting
    }

    fn key_down(&mut self, _editor: &dyn TextEditor, event: &mut EditorEvent) {
        if event.modifiers().has(self.modifier) {
            self.state.highlighting = true;
            self.dispatcher.dispatch(enable_token_highlighting());
        }
    }

    fn key_up(&mut self, _editor: &dyn TextEditor, _event: &mut EditorEvent) {
        self.disable_highlighting();
    }

    fn blur(&mut self, _editor: &dyn TextEditor, _event: &mut EditorEvent) {
        self.disable_highlighting();
    }

    fn disable_highlighting(&mut self) {
        self.state.highlighting = false;
        self.dispatcher.dispatch(disable_token_highlighting());
    }

    fn mouse_down(&mut self, editor: &dyn TextEditor, event: &mut EditorEvent) {
        if !event.modifiers().has(self.modifier) {
            return;
        }

        // Keep the editor from treating the click as cursor placement
        event.stop_propagation();
        event.prevent_default();

        let Some(coords) = event.page_coords() else {
            tracing::warn!("mouse-down event without pointer coordinates");
            return;
        };

        let pos = editor.coords_char(coords, CoordSpace::Page);
        let token = find_nearest_literal_token(editor, pos);

        if !token.is_literal() {
            tracing::trace!(?token, "click on non-literal token ignored");
            return;
        }

        let Some(document_id) = self.state.document.clone() else {
            tracing::warn!(
                ?token,
                "literal token clicked with no document attached, dropping selection"
            );
            return;
        };

        self.dispatcher.dispatch(select_token_range(document_id, token));
    }
}

impl Default for TokenMiddleware {
    fn default() -> Self {
        Self::new(TokenMiddlewareConfig::default())
    }
}

impl Middleware for TokenMiddleware {
    fn set_dispatch_function(&mut self, dispatch: DispatchFn) {
        self.dispatcher.set(dispatch);
    }

    fn event_listeners(&self) -> &EventListeners<Self> {
        &self.listeners
    }

    fn attach(&mut self, document: Option<&DocumentId>) {
        let Some(document) = document.filter(|id| !id.is_empty()) else {
            tracing::trace!("attach without a document ignored");
            return;
        };
        tracing::debug!(document = %document, "token middleware attached");
        self.state.document = Some(document.clone());
    }

    fn detach(&mut self) {
        if let Some(document) = self.state.document.take() {
            tracing::debug!(document = %document, "token middleware detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listens_to_all_event_kinds() {
        let middleware = TokenMiddleware::default();
        let kinds: Vec<_> = middleware.event_listeners().kinds().collect();
        assert_eq!(kinds, EventKind::ALL.to_vec());
    }

    #[test]
    fn test_attach_and_detach() {
        let mut middleware = TokenMiddleware::default();
        let doc = DocumentId::new("doc-1");

        middleware.attach(Some(&doc));
        assert_eq!(middleware.document(), Some(&doc));

        middleware.detach();
        assert_eq!(middleware.document(), None);
    }

    #[test]
    fn test_attach_ignores_missing_or_empty() {
        let mut middleware = TokenMiddleware::default();
        middleware.attach(None);
        assert_eq!(middleware.document(), None);

        middleware.attach(Some(&DocumentId::default()));
        assert_eq!(middleware.document(), None);
    }

    #[test]
    fn test_attach_empty_keeps_previous_document() {
        let mut middleware = TokenMiddleware::default();
        let doc = DocumentId::new("doc-1");
        middleware.attach(Some(&doc));
        middleware.attach(Some(&DocumentId::new("")));
        assert_eq!(middleware.document(), Some(&doc));
    }

    #[test]
    fn test_detach_without_document_is_noop() {
        let mut middleware = TokenMiddleware::default();
        middleware.detach();
        assert_eq!(middleware.document(), None);
    }

    #[test]
    fn test_configured_modifier() {
        let middleware = TokenMiddleware::new(TokenMiddlewareConfig {
            modifier: ModifierKey::Meta,
        });
        assert_eq!(middleware.modifier(), ModifierKey::Meta);
    }
}

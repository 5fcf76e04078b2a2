//! Editor middleware
//!
//! A middleware sits between the editor widget and the application store:
//! the widget feeds it native events, it answers by dispatching actions.
//!
//! # Lifecycle
//!
//! ```text
//! construct → set_dispatch_function → attach(doc) → events… → detach → attach(other doc) …
//! ```
//!
//! The host installs one native listener per entry in
//! [`Middleware::event_listeners`] and forwards each event through
//! [`Middleware::handle_event`].

pub mod token;

use std::fmt;

use crate::actions::{Action, DocumentId};
use crate::editor::TextEditor;
use crate::event::{EditorEvent, EventKind};

pub use token::{token_middleware, TokenMiddleware};

/// Function that submits an action to the application store
pub type DispatchFn = Box<dyn FnMut(Action)>;

/// A handler bound to one event kind
pub type Listener<M> = fn(&mut M, &dyn TextEditor, &mut EditorEvent);

/// Fixed table from event kind to handler, built once per middleware
pub struct EventListeners<M> {
    slots: [Option<Listener<M>>; 4],
}

impl<M> EventListeners<M> {
    pub fn new() -> Self {
        Self { slots: [None; 4] }
    }

    /// Install `listener` for `kind` (builder pattern)
    pub fn on(mut self, kind: EventKind, listener: Listener<M>) -> Self {
        self.slots[kind.index()] = Some(listener);
        self
    }

    pub fn get(&self, kind: EventKind) -> Option<Listener<M>> {
        self.slots[kind.index()]
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.get(kind).is_some()
    }

    /// Event kinds that have a listener installed
    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        EventKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
    }

    pub fn len(&self) -> usize {
        self.kinds().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M> Default for EventListeners<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for EventListeners<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

/// Owner of the dispatch function shared by all middleware
#[derive(Default)]
pub struct Dispatcher {
    dispatch: Option<DispatchFn>,
}

impl Dispatcher {
    pub fn new(dispatch: DispatchFn) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    pub fn set(&mut self, dispatch: DispatchFn) {
        self.dispatch = Some(dispatch);
    }

    pub fn is_set(&self) -> bool {
        self.dispatch.is_some()
    }

    /// Submit an action. Without a dispatch function the action is dropped.
    pub fn dispatch(&mut self, action: Action) {
        match self.dispatch.as_mut() {
            Some(dispatch) => {
                tracing::debug!(?action, "dispatch");
                dispatch(action);
            }
            None => {
                tracing::warn!(?action, "no dispatch function set, dropping action");
            }
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("is_set", &self.is_set())
            .finish()
    }
}

/// The surface every middleware exposes to the host widget
pub trait Middleware: Sized {
    /// Store the function used to emit actions
    fn set_dispatch_function(&mut self, dispatch: DispatchFn);

    fn event_listeners(&self) -> &EventListeners<Self>;

    /// Bind to the document currently open in the editor.
    /// `None` or an empty id is ignored.
    fn attach(&mut self, document: Option<&DocumentId>);

    /// Release the current document binding, if any
    fn detach(&mut self);

    /// Route `event` to its listener. Returns false when no listener is
    /// installed for the event's kind.
    fn handle_event(&mut self, editor: &dyn TextEditor, event: &mut EditorEvent) -> bool {
        let Some(listener) = self.event_listeners().get(event.kind()) else {
            return false;
        };
        listener(self, editor, event);
        true
    }
}

//! Editor events delivered to middleware
//!
//! The host widget wraps each native event in an [`EditorEvent`]. Handlers
//! may suppress the widget's default handling through the event.

use std::fmt;

use crate::keys::{KeyCode, Modifiers};
use crate::position::PageCoords;

/// The closed set of events a middleware can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyUp,
    KeyDown,
    Blur,
    MouseDown,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::KeyUp,
        EventKind::KeyDown,
        EventKind::Blur,
        EventKind::MouseDown,
    ];

    /// Name of the native event the host should subscribe to
    pub fn native_name(self) -> &'static str {
        match self {
            EventKind::KeyUp => "keyup",
            EventKind::KeyDown => "keydown",
            EventKind::Blur => "blur",
            EventKind::MouseDown => "mousedown",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            EventKind::KeyUp => 0,
            EventKind::KeyDown => 1,
            EventKind::Blur => 2,
            EventKind::MouseDown => 3,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

/// A native editor event
#[derive(Debug, Clone, PartialEq)]
pub struct EditorEvent {
    kind: EventKind,
    modifiers: Modifiers,
    key: Option<KeyCode>,
    pointer: Option<PageCoords>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl EditorEvent {
    fn new(kind: EventKind, modifiers: Modifiers) -> Self {
        Self {
            kind,
            modifiers,
            key: None,
            pointer: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn key_down(key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            key: Some(key),
            ..Self::new(EventKind::KeyDown, modifiers)
        }
    }

    pub fn key_up(key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            key: Some(key),
            ..Self::new(EventKind::KeyUp, modifiers)
        }
    }

    pub fn blur() -> Self {
        Self::new(EventKind::Blur, Modifiers::NONE)
    }

    /// A mouse press at page coordinates (`page_x`, `page_y`)
    pub fn mouse_down(page_x: f64, page_y: f64, modifiers: Modifiers) -> Self {
        Self {
            pointer: Some(PageCoords::new(page_x, page_y)),
            ..Self::new(EventKind::MouseDown, modifiers)
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn key(&self) -> Option<KeyCode> {
        self.key
    }

    /// Pointer position in page coordinates, for mouse events
    pub fn page_coords(&self) -> Option<PageCoords> {
        self.pointer
    }

    /// Ask the host widget to skip its default handling of this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Ask the host not to pass this event on to other listeners
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

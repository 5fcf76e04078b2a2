//! Application actions emitted by middleware
//!
//! Middleware never touches application state directly; every state change
//! it wants is expressed as one of these actions and handed to the dispatch
//! function.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Identifier of a document open in the editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Actions understood by the application store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Start highlighting selectable tokens
    EnableTokenHighlighting,
    /// Stop highlighting selectable tokens
    DisableTokenHighlighting,
    /// Select the range covered by `token` in the given document
    #[serde(rename_all = "camelCase")]
    SelectTokenRange { document_id: DocumentId, token: Token },
}

pub fn enable_token_highlighting() -> Action {
    Action::EnableTokenHighlighting
}

pub fn disable_token_highlighting() -> Action {
    Action::DisableTokenHighlighting
}

pub fn select_token_range(document_id: DocumentId, token: Token) -> Action {
    Action::SelectTokenRange { document_id, token }
}

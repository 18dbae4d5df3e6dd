//! Per-item actions keyed by `(TodoId, ActionKind)`.
//!
//! Rendered controls carry an `Action` value instead of a callback. The host
//! hands the action back to `TodoClient::dispatch`, which looks up the request
//! to send here.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::TodoId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Complete,
    Delete,
}

impl ActionKind {
    /// Controls attached to every rendered entry, in display order.
    pub const ALL: [ActionKind; 2] = [ActionKind::Complete, ActionKind::Delete];

    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Complete => "Complete",
            ActionKind::Delete => "Delete",
        }
    }

    /// Verb used in diagnostics, e.g. "failed to complete the todo".
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Complete => "complete",
            ActionKind::Delete => "delete",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown action `{0}`")]
pub struct UnknownAction(pub String);

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "complete" => Ok(ActionKind::Complete),
            "delete" => Ok(ActionKind::Delete),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}

/// One user action on one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    pub id: TodoId,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(id: TodoId, kind: ActionKind) -> Self {
        Self { id, kind }
    }

    pub fn complete(id: TodoId) -> Self {
        Self::new(id, ActionKind::Complete)
    }

    pub fn delete(id: TodoId) -> Self {
        Self::new(id, ActionKind::Delete)
    }

    pub fn request(&self, api: &TodoApi) -> HttpRequest {
        match self.kind {
            ActionKind::Complete => api.build_complete_todo(&self.id),
            ActionKind::Delete => api.build_delete_todo(&self.id),
        }
    }

    pub fn parse(&self, api: &TodoApi, response: HttpResponse) -> Result<(), ApiError> {
        match self.kind {
            ActionKind::Complete => api.parse_complete_todo(response),
            ActionKind::Delete => api.parse_delete_todo(response),
        }
    }
}

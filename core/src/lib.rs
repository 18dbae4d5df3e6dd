//! Client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `TodoClient` drives the
//! list-and-redraw flow on top of that, talking to the host only through the
//! `Transport`, `View` and `Form` traits.
//!
//! # Design
//! - `TodoApi` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - The view is replaced wholesale after every successful fetch and never
//!   patched locally.
//! - Per-item controls carry an `Action`; `TodoClient::dispatch` is the single
//!   entry point for them.

pub mod api;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use controller::{TodoClient, EMPTY_TITLE_ALERT};
pub use dispatch::{Action, ActionKind, UnknownAction};
pub use error::{ApiError, ClientError};
pub use form::{Form, MemoryForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{NewTodo, TodoId, TodoItem};
pub use view::{entries, Control, EntryState, ListEntry, MemoryView, View};

//! Error types for the todo client.
//!
//! # Design
//! `ApiError` covers what can go wrong turning a response into a value.
//! `ClientError` is what controller operations return: either the title was
//! rejected before any request, the transport failed, or the service answered
//! with something other than success. The controller treats the last two the
//! same way (log and keep the stale view); they stay separate variants so the
//! host can tell them apart in tests.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `TodoApi` build/parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status} {status_text}")]
    HttpError {
        status: u16,
        status_text: &'static str,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors returned by `TodoClient` operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The submitted title was blank after trimming; nothing was sent.
    #[error("todo title is empty")]
    EmptyTitle,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

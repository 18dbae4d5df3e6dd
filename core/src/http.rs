//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! builds `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network; a `Transport` supplied by the host executes them.
//! All fields use owned types so values move freely between the controller
//! and the host.

use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `TodoApi::build_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status, e.g. "Not Found".
    pub fn status_text(&self) -> &'static str {
        status_text(self.status)
    }
}

pub(crate) fn status_text(status: u16) -> &'static str {
    ::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

/// The host could not complete the round-trip (connection refused, DNS, ...).
#[derive(Debug, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Executes one request against the remote service.
///
/// Implementations return non-2xx responses as `Ok` data; only failures to
/// obtain a response at all are `Err`.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

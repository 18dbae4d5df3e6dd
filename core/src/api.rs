//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Mutating endpoints only need a 2xx status; their bodies are ignored.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::http::{status_text, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, TodoId, TodoItem};

/// Characters left unescaped in an id path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Synchronous, stateless request builder for the todo API.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    /// An empty `base_url` yields origin-relative paths such as `/todos`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_path(&self, id: &TodoId) -> String {
        let segment = utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string();
        format!("{}/todos/{segment}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_complete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/complete", self.item_path(id)),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Items come back in the order the service sent them.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_complete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Any 2xx is success; everything else becomes `HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        status_text: status_text(response.status),
        body: response.body.clone(),
    })
}

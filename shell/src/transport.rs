//! Blocking HTTP transport backed by ureq.

use todo_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use tracing::trace;

/// Executes `HttpRequest`s with a shared ureq agent.
///
/// Status-code-as-error is disabled so 4xx/5xx come back as data and the
/// core decides what they mean.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;
        trace!(status, bytes = body.len(), "response body read");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

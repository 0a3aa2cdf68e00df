//! Executes the core's plain-data requests over the network.

use rickdex_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

pub trait Transport: Send + Sync + 'static {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a shared ureq agent.
///
/// Statuses are returned as data, never as `Err`, so the core decides what
/// a 404 means.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
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

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let call = match request.method {
            HttpMethod::Get => self.agent.get(&request.path).call(),
        };
        let mut response = call.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(method = request.method.as_str(), path = %request.path, status, "request finished");
        Ok(HttpResponse::new(status, body))
    }
}

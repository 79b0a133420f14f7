//! HTTP transport
//!
//! [`Transport`] is the seam between request descriptors and the network;
//! [`UreqTransport`] is the blocking implementation used on the terminal.

use std::time::Duration;

use fabo_core::log;
use fabo_core::{ApiRequest, Method};

use crate::error::{ApiError, ApiResult};

/// Raw reply: status plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    /// Execute a request. Non-2xx statuses are returned, not raised.
    fn execute(&self, request: &ApiRequest) -> ApiResult<Response>;
}

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &ApiRequest) -> ApiResult<Response> {
        let method = match request.method {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        log::debug("http", &format!("{} {}", method, request.url));

        let mut call = self.agent.request(method, &request.url);
        for (key, value) in &request.params {
            call = call.query(key, value);
        }

        let result = match &request.body {
            Some(body) => call.send_json(body.clone()),
            None => call.call(),
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(err) => return Err(ApiError::from(err)),
        };
        let status = response.status();
        let body = response.into_string()?;
        Ok(Response { status, body })
    }
}

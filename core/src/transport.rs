//! HTTP transport and response classification.
//!
//! # Design
//! `Transport` owns one `ureq::Agent`, built once and reused for every
//! request; the agent and its pooled connections are released when the
//! `Transport` is dropped. A fetch is split in two:
//! - `execute` performs the GET and reduces the outcome to an `HttpResponse`.
//! - `check_response` classifies that plain value into a document or error.
//!
//! `fetch` takes `&mut self`. Callers that need concurrency either hold one
//! `Transport` per worker or serialize access behind a lock.

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};
use ureq::Agent;

use crate::error::{Result, ZillowError};
use crate::http::HttpResponse;
use crate::response::ServiceResponse;

/// Largest response body `Transport` buffers unless configured otherwise.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Agent settings. No timeout is applied unless one is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub timeout: Option<Duration>,
    /// Bodies longer than this fail with `ZillowError::Transport`.
    pub max_body_bytes: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Owns the HTTP agent used to talk to the web service.
pub struct Transport {
    agent: Agent,
    max_body_bytes: u64,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new() -> Self {
        Self::with_config(&TransportConfig::default())
    }

    pub fn with_config(config: &TransportConfig) -> Self {
        // Error statuses come back as data; classification happens on the body.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self {
            agent,
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// GET `uri` and return the parsed document if the service reported
    /// success.
    pub fn fetch(&mut self, uri: &str) -> Result<ServiceResponse> {
        let response = self.execute(uri)?;
        check_response(response)
    }

    /// Perform the GET and buffer the whole body. Failing to obtain a
    /// complete body is a transport failure in its own right.
    fn execute(&mut self, uri: &str) -> Result<HttpResponse> {
        let endpoint = uri.split('?').next().unwrap_or(uri);
        debug!(endpoint, "sending request");

        let mut response = match self.agent.get(uri).call() {
            Ok(response) => response,
            Err(err) => {
                warn!(endpoint, error = %err, "request failed before a response arrived");
                return Err(ZillowError::transport(0));
            }
        };

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_body_bytes)
            .read_to_vec()
            .map_err(|err| {
                warn!(endpoint, status, error = %err, "failed to read response body");
                ZillowError::transport(status)
            })?;
        debug!(endpoint, status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a buffered response.
///
/// Unparsable bodies become `ZillowError::Transport` keyed on the HTTP
/// status. Parsed bodies whose `message/code` is not `"0"` become
/// `ZillowError::Application`. The HTTP status of a parsable body is not
/// consulted.
pub fn check_response(response: HttpResponse) -> Result<ServiceResponse> {
    let document = match ServiceResponse::parse(&response.body) {
        Ok(document) => document,
        Err(err) => {
            warn!(status = response.status, error = %err, "response body is not XML");
            return Err(ZillowError::transport(response.status));
        }
    };

    let code = document.code();
    if code != "0" {
        let message = document.text();
        warn!(code = %code, message = %message, "service rejected request");
        return Err(ZillowError::Application { code, message });
    }

    Ok(document)
}

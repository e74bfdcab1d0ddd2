//! Blocking JSON-RPC client over HTTP.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use ureq::Agent;

use crate::envelope::{RpcRequest, extract_result};
use crate::error::{Result, RpcError};
use crate::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

/// Blocking JSON-RPC 2.0 client bound to a single endpoint.
///
/// Every call is exactly one HTTP POST: no retry, no backoff, no
/// correlation of concurrent requests. An unresponsive server therefore
/// stalls the caller for at most the configured timeout.
#[derive(Debug, Clone)]
pub struct RpcClient {
    endpoint: String,
    agent: Agent,
}

impl RpcClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        // 4xx/5xx must not surface as transport errors here; the status is
        // checked explicitly so the body stays readable for logging.
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            agent: config.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke `method` with `params`, collapsing every failure to `None`.
    ///
    /// "Server unreachable" and "server returned nothing" are deliberately
    /// indistinguishable at this level: both map to the same degraded UI
    /// state. The cause is still visible at debug level.
    pub fn call(&self, method: &str, params: Value) -> Option<Value> {
        match self.try_call(method, params) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(method, %err, "RPC call failed");
                None
            }
        }
    }

    /// Fallible form of [`call`](Self::call), for callers that want the
    /// cause of a failure.
    pub fn try_call(&self, method: &str, params: Value) -> Result<Value> {
        let request = RpcRequest::new(method, params);
        let body = serde_json::to_string(&request)?;

        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .send(body)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status(status.as_u16()));
        }

        let text = response.body_mut().read_to_string()?;
        extract_result(&text)
    }
}

impl Default for RpcClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }
}

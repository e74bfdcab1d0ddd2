//! Client configuration.

use std::env;
use std::time::Duration;

use zeprpc::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, RpcClient};

/// Default refresh interval of the status display
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Endpoint override variable
pub const ENDPOINT_VAR: &str = "ZEPPELIN_ENDPOINT";

/// Poll interval override variable, in milliseconds
pub const POLL_MS_VAR: &str = "ZEPPELIN_POLL_MS";

/// Runtime configuration shared by both binaries.
///
/// Built once in `main` and passed down explicitly; there is no
/// process-wide mutable configuration state.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Config {
    /// Resolve the configuration from the environment.
    ///
    /// `ZEPPELIN_ENDPOINT` overrides the endpoint URL and `ZEPPELIN_POLL_MS`
    /// the refresh interval; anything absent or unparsable keeps the
    /// default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = env::var(ENDPOINT_VAR) {
            if !endpoint.is_empty() {
                config.endpoint = endpoint;
            }
        }

        if let Ok(value) = env::var(POLL_MS_VAR) {
            if let Ok(ms) = value.parse::<u64>() {
                if ms > 0 {
                    config.poll_interval = Duration::from_millis(ms);
                }
            }
        }

        config
    }

    /// Build the RPC client for this configuration.
    pub fn client(&self) -> RpcClient {
        RpcClient::new(&self.endpoint, self.timeout)
    }
}

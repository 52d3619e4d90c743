//! HTTP transport — fetch feed documents with ureq.
//!
//! Feature-gated behind `http` so embedders bringing their own transport
//! keep the build minimal.

use std::time::Duration;

use super::{HttpResponse, Transport};
use crate::error::TransportError;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_USER_AGENT: &str = concat!("catalog/", env!("CARGO_PKG_VERSION"));

pub const ENV_TIMEOUT_MS: &str = "CATALOG_HTTP_TIMEOUT_MS";
pub const ENV_USER_AGENT: &str = "CATALOG_HTTP_USER_AGENT";

/// Transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Whole-request timeout. `None` waits forever.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpConfig {
    /// Read overrides from the environment, falling back to defaults.
    ///
    /// `CATALOG_HTTP_TIMEOUT_MS=0` disables the timeout.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.timeout = None,
                Ok(ms) => config.timeout = Some(Duration::from_millis(ms)),
                Err(_) => log::warn!(
                    "catalog: invalid {}={:?}, using {}ms",
                    ENV_TIMEOUT_MS,
                    raw,
                    DEFAULT_TIMEOUT_MS
                ),
            }
        }

        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }

        config
    }
}

/// Blocking transport over a shared ureq agent.
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(config: HttpConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(config.timeout)
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            user_agent: config.user_agent,
        }
    }

    pub fn from_env() -> Self {
        Self::new(HttpConfig::from_env())
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(TransportError::new)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Ok(HttpResponse::status_only(status));
        }

        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(TransportError::new)?;
        Ok(HttpResponse::new(status, body))
    }
}

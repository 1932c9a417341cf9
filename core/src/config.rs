//! Client configuration.
//!
//! The ZWS ID is the only required setting. The base URL defaults to the
//! public web service and is overridden mainly to point tests at a local
//! server.

use std::time::Duration;

use crate::error::ConfigError;
use crate::transport::TransportConfig;

pub const DEFAULT_BASE_URL: &str = "http://www.zillow.com/webservice";

pub const ZWS_ID_VAR: &str = "ZWS_ID";
pub const BASE_URL_VAR: &str = "ZILLOW_BASE_URL";
pub const TIMEOUT_VAR: &str = "ZILLOW_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub zws_id: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(zws_id: impl Into<String>) -> Self {
        Self {
            zws_id: zws_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `ZWS_ID`, `ZILLOW_BASE_URL` and `ZILLOW_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let zws_id = lookup(ZWS_ID_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(ZWS_ID_VAR))?;
        let mut config = Self::new(zws_id);

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(&base_url);
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            ..TransportConfig::default()
        }
    }
}

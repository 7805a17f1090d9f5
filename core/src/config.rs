//! Client configuration.
//!
//! # Design
//! The endpoint is resolved once, at construction, from an explicit
//! `StateClientConfig`. `from_env` is the documented way to pick up the
//! sidecar's `DAPR_HTTP_PORT`; nothing else reads the process environment.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Port the sidecar's HTTP API listens on when `DAPR_HTTP_PORT` is unset.
pub const DEFAULT_HTTP_PORT: u16 = 3500;

/// Environment variable holding the sidecar's HTTP port.
pub const HTTP_PORT_ENV: &str = "DAPR_HTTP_PORT";

/// Version prefix of the sidecar's HTTP API.
pub const API_VERSION: &str = "v1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateClientConfig {
    /// Full base URL of the state API, e.g. `http://localhost:3500/v1.0`.
    /// Takes precedence over `dapr_http_port`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default = "default_http_port")]
    pub dapr_http_port: u16,
}

fn default_http_port() -> u16 {
    DEFAULT_HTTP_PORT
}

impl Default for StateClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            dapr_http_port: DEFAULT_HTTP_PORT,
        }
    }
}

impl StateClientConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// Defaults, overridden by `DAPR_HTTP_PORT` when it is set.
    pub fn from_env() -> Result<Self, StateError> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(Env::raw().only(&[HTTP_PORT_ENV])),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, StateError> {
        Ok(figment.extract()?)
    }

    /// The resolved base URL, without a trailing slash.
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}/{API_VERSION}", self.dapr_http_port),
        }
    }
}

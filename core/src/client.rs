//! Async client for the sidecar's state API.
//!
//! # Design
//! `StateClient` pairs a `StateApi` with a `Transport`. Every operation is a
//! single build, execute, parse sequence: no retries, no caching, no shared
//! mutable state, so concurrent calls are independent. Invalid keys are
//! rejected while building, before the transport is reached.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::StateApi;
use crate::config::StateClientConfig;
use crate::error::StateError;
use crate::transport::{ReqwestTransport, Transport};

#[derive(Debug, Clone)]
pub struct StateClient<T = ReqwestTransport> {
    api: StateApi,
    transport: T,
}

impl StateClient<ReqwestTransport> {
    pub fn new(config: &StateClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    /// Client for `http://localhost:$DAPR_HTTP_PORT/v1.0` (port 3500 if unset).
    pub fn from_env() -> Result<Self, StateError> {
        Ok(Self::new(&StateClientConfig::from_env()?))
    }
}

impl<T: Transport> StateClient<T> {
    pub fn with_transport(config: &StateClientConfig, transport: T) -> Self {
        Self {
            api: StateApi::new(&config.endpoint()),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.api.endpoint()
    }

    /// Fetch the value stored under `key`, or `None` if there is none.
    pub async fn get_state<V>(&self, store: &str, key: &str) -> Result<Option<V>, StateError>
    where
        V: DeserializeOwned,
    {
        let request = self.api.build_get_state(store, key)?;
        debug!(method = request.method.as_str(), url = %request.url, "getting state");

        let response = self.transport.execute(request).await?;
        let status = response.status;
        let result = self.api.parse_get_state(response);
        match &result {
            Ok(None) => debug!(store, key, status, "no state for key"),
            Ok(Some(_)) => debug!(store, key, status, "got state"),
            Err(err) => warn!(store, key, status, error = %err, "get state failed"),
        }
        result
    }

    /// Store `value` under `key`.
    pub async fn set_state<V>(&self, store: &str, key: &str, value: &V) -> Result<(), StateError>
    where
        V: Serialize + ?Sized,
    {
        let request = self.api.build_set_state(store, key, value)?;
        debug!(method = request.method.as_str(), url = %request.url, "setting state");

        let response = self.transport.execute(request).await?;
        let status = response.status;
        let result = self.api.parse_set_state(response);
        if let Err(err) = &result {
            warn!(store, key, status, error = %err, "set state failed");
        }
        result
    }
}

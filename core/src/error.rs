//! Error types for the state client.
//!
//! # Design
//! One enum covers every failure class so callers can branch on the kind of
//! failure instead of parsing messages. Read and write failures each get a
//! single variant regardless of whether the sidecar answered 4xx or 5xx; the
//! status and body ride along for debugging only.

use thiserror::Error;

/// Errors returned by `StateApi` and `StateClient` operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// The key contains characters outside `[A-Za-z0-9_-]`, or is empty.
    #[error("invalid key format: {key:?}")]
    InvalidKey { key: String },

    /// The sidecar answered a read with a non-2xx status.
    #[error("could not get state (HTTP {status}): {body}")]
    GetFailed { status: u16, body: String },

    /// The sidecar answered a write with a non-2xx status.
    #[error("could not set state (HTTP {status}): {body}")]
    SetFailed { status: u16, body: String },

    /// The value could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A successful read returned a body that is not valid JSON for the
    /// requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The environment-derived configuration could not be extracted.
    #[error("invalid configuration: {0}")]
    Config(#[source] Box<figment::Error>),
}

impl StateError {
    /// HTTP status of a rejected read or write, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            StateError::GetFailed { status, .. } | StateError::SetFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<figment::Error> for StateError {
    fn from(err: figment::Error) -> Self {
        StateError::Config(Box::new(err))
    }
}

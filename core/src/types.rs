//! Wire DTOs for the state API.
//!
//! # Design
//! The mock sidecar defines its own copy of `StateItem` over
//! `serde_json::Value`; integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// One key/value entry in the body of a state write.
///
/// The sidecar accepts an array of these; this client always sends exactly
/// one. Field order matters for byte-exact bodies: `key` then `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateItem<V> {
    pub key: String,
    pub value: V,
}

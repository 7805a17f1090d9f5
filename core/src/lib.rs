//! Client for the key-value state API exposed by a Dapr sidecar over HTTP.
//!
//! # Overview
//! Two operations: `get_state` reads the JSON value stored under a key, and
//! `set_state` writes one. Keys are validated locally before any request is
//! made; HTTP outcomes map to `Option<V>` or a typed `StateError`.
//!
//! # Design
//! - `StateApi` is sans-IO: `build_*` produces an `HttpRequest`, `parse_*`
//!   consumes an `HttpResponse`, so the wire contract is testable without a
//!   network.
//! - `StateClient` drives `StateApi` through a `Transport`; `ReqwestTransport`
//!   is the default.
//! - `StateClientConfig` resolves the endpoint once, at construction.
//! - DTOs are defined independently from the mock-sidecar crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod key;
pub mod transport;
pub mod types;

pub use api::StateApi;
pub use client::StateClient;
pub use config::StateClientConfig;
pub use error::StateError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use key::validate_key;
pub use transport::{ReqwestTransport, Transport};
pub use types::StateItem;

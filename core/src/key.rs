//! State key validation.
//!
//! Keys are interpolated into the request path, so anything beyond
//! `[A-Za-z0-9_-]` is rejected before a request is ever built.

use crate::error::StateError;

/// Return `key` unchanged if it is one or more characters from
/// `[A-Za-z0-9_-]`, otherwise `StateError::InvalidKey`.
pub fn validate_key(key: &str) -> Result<&str, StateError> {
    if !key.is_empty() && key.bytes().all(is_key_byte) {
        Ok(key)
    } else {
        Err(StateError::InvalidKey {
            key: key.to_string(),
        })
    }
}

fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

//! Cache validator tokens for conditional responses.
//!
//! A token is an opaque dot-separated string; a client that presents a token
//! matching the current state can be served from cache.

use std::fmt::Display;

/// Every token is prefixed with the crate version so a release invalidates
/// previously issued validators.
pub const ETAG_ROOT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Join parts into a validator string. Same parts, same token.
pub fn etag(parts: &[&dyn Display]) -> String {
    let mut token = String::from(ETAG_ROOT_VERSION);
    for part in parts {
        token.push('.');
        token.push_str(&part.to_string());
    }
    token
}

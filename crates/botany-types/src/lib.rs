//! Shared domain types for Botany.
//!
//! Bot accounts, their patch and wire forms, the projected user record, cache
//! validator tokens, and the validation error contract.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod bot;
pub mod error;
pub mod etag;
pub mod user;

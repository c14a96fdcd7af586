use std::collections::BTreeMap;

use thiserror::Error;

/// Diagnostic key/value pairs attached to an error for logging.
pub type TraceContext = BTreeMap<String, String>;

/// Status code carried by every validation failure in this crate.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// A rejected operation, with enough context for an API layer to build a
/// response and for logs to identify the entity involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation}: {message_key}")]
pub struct AppError {
    /// Operation that rejected the input (e.g. "Bot.IsValid").
    pub operation: &'static str,
    /// Stable machine-readable key naming the rule that failed.
    pub message_key: &'static str,
    /// Minimum identifying fields of the entity involved.
    pub trace: TraceContext,
    /// Freeform debugging detail, never shown to end users.
    pub detail: String,
    /// HTTP status class the failure maps to.
    pub status_code: u16,
}

impl AppError {
    pub fn new(
        operation: &'static str,
        message_key: &'static str,
        trace: TraceContext,
        detail: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self {
            operation,
            message_key,
            trace,
            detail: detail.into(),
            status_code,
        }
    }
}

//! Core error types

use thiserror::Error;

/// Errors surfaced by the text-input collaborators.
///
/// Nothing in the context's public API returns these: per the error model,
/// failures from the session layer are absorbed and logged, and the context
/// falls back to its documented defaults. The type exists for the
/// `SessionFactory` boundary, where session creation can genuinely fail.
#[derive(Error, Debug, Clone)]
pub enum ContextError {
    #[error("text-input session unavailable: {0}")]
    SessionUnavailable(String),

    #[error("protocol error: {0}")]
    Protocol(String),
}

impl ContextError {
    pub fn session_unavailable(msg: impl Into<String>) -> Self {
        Self::SessionUnavailable(msg.into())
    }

    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ContextError>;

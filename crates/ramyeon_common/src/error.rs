//! Typed error for the completion-service boundary.

use thiserror::Error;

/// Failure modes of the external generative completion call.
///
/// All variants funnel into the same fixed fallback response at the
/// orchestrator; the split exists for logging and tests.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// Network-level failure: connect, timeout, TLS, body read.
    #[error("completion transport failed: {0}")]
    Transport(String),

    /// Service answered with a non-2xx status.
    #[error("completion service returned status {0}")]
    Status(u16),

    /// Payload was not the JSON object the contract requires.
    #[error("malformed completion payload: {0}")]
    Malformed(String),
}

//! Gate service error types.
//!
//! The credential check itself is a total predicate and never surfaces an
//! error to its caller; `GateError` is the error channel of the registry
//! contract and of process-level setup. Internal details are logged
//! server-side, never exposed on the decision path.

use thiserror::Error;

/// Gate service error type.
#[derive(Debug, Error)]
pub enum GateError {
    /// Registry lookup failed (backend unavailable, I/O error).
    #[error("Registry error: {0}")]
    Registry(String),

    /// Observability setup failed.
    #[error("Observability error: {0}")]
    Observability(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

//! Error types for the session lifecycle crate.

use thiserror::Error;

/// Errors returned by session lifecycle operations.
#[derive(Debug, Error)]
pub enum AriaCoreError {
    /// The controller's one-shot start was called twice.
    #[error("session already started")]
    AlreadyStarted,
    /// The agent runtime failed to accept the session.
    #[error("runtime error: {0}")]
    Runtime(String),
}

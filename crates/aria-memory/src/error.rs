//! Error types for memory gateway operations.

/// Errors returned by memory gateways.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The backing store could not be reached.
    #[error("memory store unreachable: {0}")]
    RemoteUnavailable(String),
    /// The backing store rejected the request.
    #[error("memory store error (status={status}): {message}")]
    Api { status: u16, message: String },
    /// A response body could not be decoded.
    #[error("failed to decode memory response: {0}")]
    Decode(String),
    /// The gateway is not configured with an API key.
    #[error("memory api key not configured")]
    MissingApiKey,
}

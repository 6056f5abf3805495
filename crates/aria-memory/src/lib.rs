//! Memory gateway for the hosted semantic-memory store.
//!
//! The gateway is deliberately a pass-through: it fetches a user's
//! stored memories and appends new conversation turns, and owns no
//! eviction, summarization, or deduplication of its own — the remote
//! store provides all of that.

mod error;
mod gateway;
mod model;

/// Memory error type.
pub use error::MemoryError;
/// Gateway interface and hosted-API implementation.
pub use gateway::{HostedMemoryGateway, MemoryGateway};
/// Memory record model.
pub use model::MemoryRecord;

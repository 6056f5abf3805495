//! Agent runtime collaborator interfaces.
//!
//! The real-time audio/video session engine lives outside this
//! workspace; these traits describe the three things the lifecycle
//! controller needs from it.

use crate::error::AriaCoreError;
use crate::seed::SeedContext;
use aria_protocol::ConversationItem;
use async_trait::async_trait;
use std::sync::Arc;

/// Callback invoked exactly once when a session ends.
#[async_trait]
pub trait ShutdownHook: Send + Sync {
    /// Run the hook. Must be best-effort: nothing may escape it.
    async fn run(&self);
}

/// External real-time agent runtime.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Accept the seeded context and begin the live session.
    async fn start(&self, seed: SeedContext) -> Result<(), AriaCoreError>;

    /// Snapshot of the live transcript's item sequence.
    fn transcript(&self) -> Vec<ConversationItem>;

    /// Register a hook the runtime invokes once at session end.
    fn register_shutdown(&self, hook: Arc<dyn ShutdownHook>);
}

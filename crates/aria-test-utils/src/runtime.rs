use aria_core::{AgentRuntime, AriaCoreError, SeedContext, ShutdownHook};
use aria_protocol::ConversationItem;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Scripted agent runtime capturing the seed and registered hook.
#[derive(Default)]
pub struct StubRuntime {
    fail_start: bool,
    seed: Mutex<Option<SeedContext>>,
    transcript: Mutex<Vec<ConversationItem>>,
    hooks: Mutex<Vec<Arc<dyn ShutdownHook>>>,
}

impl StubRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime whose start call fails.
    pub fn failing_start() -> Self {
        Self {
            fail_start: true,
            ..Self::default()
        }
    }

    /// The seed context received at start, if any.
    pub fn seed(&self) -> Option<SeedContext> {
        self.seed.lock().clone()
    }

    /// Replace the live transcript the runtime will report.
    pub fn set_transcript(&self, items: Vec<ConversationItem>) {
        *self.transcript.lock() = items;
    }

    /// Number of hooks registered with the runtime.
    pub fn hook_count(&self) -> usize {
        self.hooks.lock().len()
    }

    /// Invoke every registered hook once, as the runtime would at
    /// session end.
    pub async fn fire_shutdown(&self) {
        let hooks: Vec<Arc<dyn ShutdownHook>> = self.hooks.lock().clone();
        for hook in hooks {
            hook.run().await;
        }
    }
}

#[async_trait]
impl AgentRuntime for StubRuntime {
    async fn start(&self, seed: SeedContext) -> Result<(), AriaCoreError> {
        if self.fail_start {
            return Err(AriaCoreError::Runtime("stub start failure".to_string()));
        }
        *self.seed.lock() = Some(seed);
        Ok(())
    }

    fn transcript(&self) -> Vec<ConversationItem> {
        self.transcript.lock().clone()
    }

    fn register_shutdown(&self, hook: Arc<dyn ShutdownHook>) {
        self.hooks.lock().push(hook);
    }
}

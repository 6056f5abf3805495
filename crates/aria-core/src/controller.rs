//! Session lifecycle controller and shutdown commit hook.

use crate::error::AriaCoreError;
use crate::extract::build_batch;
use crate::runtime::{AgentRuntime, ShutdownHook};
use crate::seed::SeedContext;
use aria_memory::MemoryGateway;
use aria_protocol::ChatMessage;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, not yet started.
    Init,
    /// Live under the agent runtime.
    Live,
    /// Ended; the commit hook has run, or the start handoff failed
    /// and the session never went live.
    Closed,
}

/// Shutdown hook that commits the filtered transcript.
///
/// Captures exactly what the commit needs: the transcript source, the
/// gateway, the injected seed string, and the user id. A fired flag
/// makes duplicate invocation a no-op, so a double-registered hook
/// still commits at most once.
pub struct CommitHook {
    runtime: Arc<dyn AgentRuntime>,
    gateway: Arc<dyn MemoryGateway>,
    memory_seed: Option<String>,
    user_id: String,
    fired: AtomicBool,
}

impl CommitHook {
    fn new(
        runtime: Arc<dyn AgentRuntime>,
        gateway: Arc<dyn MemoryGateway>,
        memory_seed: Option<String>,
        user_id: String,
    ) -> Self {
        Self {
            runtime,
            gateway,
            memory_seed,
            user_id,
            fired: AtomicBool::new(false),
        }
    }

    /// Whether the hook has already run.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShutdownHook for CommitHook {
    async fn run(&self) {
        if self.fired.swap(true, Ordering::SeqCst) {
            debug!("shutdown hook already ran (user_id={})", self.user_id);
            return;
        }

        let items = self.runtime.transcript();
        let batch = build_batch(&items, self.memory_seed.as_deref());
        if batch.is_empty() {
            debug!(
                "no qualifying turns; skipping memory commit (user_id={})",
                self.user_id
            );
            return;
        }

        // The session has already ended; a failed write has no
        // user-facing recovery path, so it is logged and dropped.
        match self.gateway.commit(&batch, &self.user_id).await {
            Ok(()) => info!(
                "persisted session turns (user_id={}, count={})",
                self.user_id,
                batch.len()
            ),
            Err(err) => warn!(
                "memory commit failed; discarding batch (user_id={}, reason={err})",
                self.user_id
            ),
        }
    }
}

/// Orchestrates one session's memory lifecycle: fetch and seed before
/// the live session, register the commit hook, then stay out of the
/// runtime's way.
pub struct SessionController {
    gateway: Arc<dyn MemoryGateway>,
    user_id: String,
    preamble: Vec<ChatMessage>,
    started: bool,
    start_failed: bool,
    hook: Option<Arc<CommitHook>>,
}

impl SessionController {
    /// Create a controller for one session, scoped to a user.
    ///
    /// The gateway is an explicit session-scoped dependency; nothing
    /// here is process-wide.
    pub fn new(gateway: Arc<dyn MemoryGateway>, user_id: impl Into<String>) -> Self {
        Self {
            gateway,
            user_id: user_id.into(),
            preamble: Vec::new(),
            started: false,
            start_failed: false,
            hook: None,
        }
    }

    /// Prepend messages to the seed context ahead of the memory seed.
    pub fn with_preamble(mut self, preamble: Vec<ChatMessage>) -> Self {
        self.preamble = preamble;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        if !self.started {
            return SessionState::Init;
        }
        if self.start_failed {
            return SessionState::Closed;
        }
        match &self.hook {
            Some(hook) if hook.has_fired() => SessionState::Closed,
            _ => SessionState::Live,
        }
    }

    /// One-shot transition from `Init` to `Live`.
    ///
    /// Fetches prior memories, seeds the context, registers the
    /// commit hook once, and hands the session to the runtime. A
    /// fetch failure or empty result degrades to an unseeded context;
    /// it never aborts the start.
    pub async fn start(&mut self, runtime: Arc<dyn AgentRuntime>) -> Result<(), AriaCoreError> {
        if self.started {
            return Err(AriaCoreError::AlreadyStarted);
        }
        self.started = true;

        let mut seed = SeedContext::new();
        for message in self.preamble.drain(..) {
            seed.push(message);
        }

        match self.gateway.fetch_all(&self.user_id).await {
            Ok(records) if records.is_empty() => {
                debug!("no stored memories (user_id={})", self.user_id);
            }
            Ok(records) => {
                info!(
                    "seeding prior memories (user_id={}, count={})",
                    self.user_id,
                    records.len()
                );
                seed.seed_memories(&records);
            }
            Err(err) => {
                warn!(
                    "memory fetch failed; starting without prior context (user_id={}, reason={err})",
                    self.user_id
                );
            }
        }

        let hook = Arc::new(CommitHook::new(
            runtime.clone(),
            self.gateway.clone(),
            seed.memory_seed().map(str::to_string),
            self.user_id.clone(),
        ));
        runtime.register_shutdown(hook.clone());
        self.hook = Some(hook);

        let result = runtime.start(seed).await;
        if result.is_err() {
            self.start_failed = true;
        }
        result
    }
}

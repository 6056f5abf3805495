//! Tool execution context and injected service seams.

use crate::providers::{Mailer, SearchProvider, WeatherProvider};
use std::sync::Arc;

/// Shared provider dependencies for a session (constructed once,
/// shared via Arc).
///
/// Each seam is optional; a tool whose provider is absent fails at
/// its own boundary instead of blocking session start.
#[derive(Default)]
pub struct ToolServices {
    /// Optional weather provider.
    pub weather: Option<Arc<dyn WeatherProvider>>,
    /// Optional web search provider.
    pub search: Option<Arc<dyn SearchProvider>>,
    /// Optional outbound mailer.
    pub mailer: Option<Arc<dyn Mailer>>,
}

/// Context passed to tools during execution.
#[derive(Clone, Default)]
pub struct ToolContext {
    /// Session-scoped services (cheap Arc clone).
    pub services: Arc<ToolServices>,
}

impl ToolContext {
    /// Build a context around the given services.
    pub fn new(services: ToolServices) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}

//! Built-in tools bundled with the assistant.

mod email;
mod utils;
mod weather;
mod web;

use crate::ToolRegistry;
use aria_config::SearchConfig;
use log::info;
use std::sync::Arc;

pub use email::SendEmailTool;
pub use weather::GetWeatherTool;
pub use web::WebSearchTool;

/// Register all built-in tools with the provided registry.
pub fn register_builtin_tools(registry: &ToolRegistry, search: &SearchConfig) {
    registry.register(Arc::new(GetWeatherTool));
    registry.register(Arc::new(WebSearchTool::from_config(search)));
    registry.register(Arc::new(SendEmailTool));
    info!("registered built-in tools");
}

/// Build a registry pre-populated with built-in tools.
pub fn builtin_tool_registry(search: &SearchConfig) -> ToolRegistry {
    let registry = ToolRegistry::new();
    register_builtin_tools(&registry, search);
    registry
}

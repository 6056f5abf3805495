//! Tooling interfaces and built-in tools for the aria assistant.

pub mod builtins;
mod context;
pub mod providers;
mod registry;
mod render;
mod tool;

/// Built-in tool registry and registration helper.
pub use builtins::{builtin_tool_registry, register_builtin_tools};
/// Tool context and service seams.
pub use context::{ToolContext, ToolServices};
/// Provider interfaces and default implementations.
pub use providers::{
    DuckDuckGoProvider, Mailer, SearchProvider, SearchResult, SmtpMailer, WeatherProvider,
    WttrWeatherProvider, search_provider_from_config,
};
/// Tool registry type.
pub use registry::ToolRegistry;
/// Natural-language rendering of tool failures.
pub use render::render_tool_error;
/// Tool trait and spec type.
pub use tool::{Tool, ToolSpec};

/// Tool boundary error (re-exported from the protocol crate).
pub use aria_protocol::ToolError;

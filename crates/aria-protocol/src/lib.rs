//! Shared wire-level types for the aria workspace.
//!
//! This crate owns the chat message model exchanged with the agent
//! runtime and the memory store, plus the tool error taxonomy.

mod message;
mod tool;

/// Chat roles and messages.
pub use message::{ChatMessage, ConversationItem, Role};
/// Tool boundary error taxonomy.
pub use tool::ToolError;

//! Chat message model shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaker role for a persistable conversation turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User-authored turn.
    User,
    /// Assistant-authored turn.
    Assistant,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Parse a role from a runtime role string.
    ///
    /// Runtime transcripts carry free-form roles (system, function
    /// call markers and the like); only user and assistant turns are
    /// persistable, everything else returns `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single role-tagged conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Role that produced the turn.
    pub role: Role,
    /// Turn content.
    pub content: String,
}

impl ChatMessage {
    /// Build a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// An entry in the live transcript owned by the agent runtime.
///
/// The runtime appends these during the session; this workspace only
/// reads them back at shutdown. The role is free-form and the content
/// is either a JSON string or an array of strings, so both stay loose
/// here and are validated during extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationItem {
    /// Runtime-reported role string.
    pub role: String,
    /// Content as reported by the runtime.
    pub content: serde_json::Value,
}

impl ConversationItem {
    /// Build an item with string content.
    pub fn text(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: serde_json::Value::String(content.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatMessage, ConversationItem, Role};
    use pretty_assertions::assert_eq;

    #[test]
    fn role_parses_persistable_roles_only() {
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("assistant"), Some(Role::Assistant));
        assert_eq!(Role::parse("system"), None);
        assert_eq!(Role::parse("function_call"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        let message = ChatMessage::user("hi");
        let json = serde_json::to_string(&message).expect("serialize");
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }

    #[test]
    fn conversation_item_text_wraps_string_content() {
        let item = ConversationItem::text("assistant", "hello");
        assert_eq!(item.role, "assistant");
        assert_eq!(item.content, serde_json::json!("hello"));
    }
}

//! Shutdown-time extraction of persistable conversation turns.

use aria_protocol::{ChatMessage, ConversationItem, Role};
use log::warn;
use serde_json::Value;

/// Build the batch of turns to persist from a live transcript.
///
/// Keeps only user/assistant turns, drops anything echoing the
/// injected memory seed, and skips malformed items individually so
/// one bad entry never costs the rest of the batch.
pub fn build_batch(items: &[ConversationItem], memory_seed: Option<&str>) -> Vec<ChatMessage> {
    let mut batch = Vec::new();
    for item in items {
        // Non-persistable roles (system, tool and function-call
        // markers) are filtered, not errors.
        let Some(role) = Role::parse(&item.role) else {
            continue;
        };
        let content = match item_content(&item.content) {
            Some(content) => content,
            None => {
                warn!(
                    "skipping malformed transcript item (role={}, content={})",
                    item.role, item.content
                );
                continue;
            }
        };
        if let Some(seed) = memory_seed
            && content.contains(seed)
        {
            continue;
        }
        batch.push(ChatMessage { role, content });
    }
    batch
}

/// Flatten item content into a single string.
///
/// Runtimes report content as either a string or a list of strings;
/// anything else is malformed.
fn item_content(value: &Value) -> Option<String> {
    match value {
        Value::String(content) => Some(content.clone()),
        Value::Array(parts) => {
            let mut flat = Vec::with_capacity(parts.len());
            for part in parts {
                flat.push(part.as_str()?);
            }
            Some(flat.join("\n"))
        }
        _ => None,
    }
}

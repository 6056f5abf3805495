//! Memory record model returned by gateways.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored memory fact read back from the remote store.
///
/// Records are created remotely and read-only here; the hosted API
/// calls the text field `memory`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryRecord {
    /// Memory text content.
    #[serde(rename = "memory")]
    pub text: String,
    /// Last update timestamp, when the store reports one.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MemoryRecord {
    /// Build a record with just text content.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            updated_at: None,
        }
    }
}

//! Utility helpers shared by built-in tools.

use aria_protocol::ToolError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse JSON args into a typed struct for tool calls.
pub(super) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|err| ToolError::InvalidArguments(err.to_string()))
}

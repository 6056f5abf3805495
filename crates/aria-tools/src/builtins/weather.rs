//! Built-in weather lookup tool.

use crate::builtins::utils::parse_args;
use crate::{Tool, ToolContext};
use aria_protocol::ToolError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

/// Tool fetching current weather for a city.
#[derive(Debug, Default)]
pub struct GetWeatherTool;

/// Arguments for GetWeatherTool.
#[derive(Debug, Deserialize)]
struct GetWeatherArgs {
    city: String,
}

#[async_trait]
impl Tool for GetWeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get the current weather for a given city"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name to look up."
                }
            },
            "required": ["city"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError> {
        let input: GetWeatherArgs = parse_args(args)?;
        if input.city.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "city cannot be empty".to_string(),
            ));
        }
        let provider = ctx.services.weather.as_ref().ok_or_else(|| {
            ToolError::ExecutionFailed("weather provider not configured".to_string())
        })?;
        provider.current(&input.city).await
    }
}

#[cfg(test)]
mod tests {
    use super::GetWeatherTool;
    use crate::{Tool, ToolContext};
    use aria_protocol::ToolError;
    use serde_json::json;

    #[tokio::test]
    async fn rejects_missing_and_empty_city() {
        let tool = GetWeatherTool;
        let ctx = ToolContext::default();

        let err = tool.call(&ctx, json!({})).await.err().expect("err");
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err = tool
            .call(&ctx, json!({"city": "  "}))
            .await
            .err()
            .expect("err");
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn missing_provider_is_an_execution_failure() {
        let tool = GetWeatherTool;
        let ctx = ToolContext::default();
        let err = tool
            .call(&ctx, json!({"city": "Paris"}))
            .await
            .err()
            .expect("err");
        assert!(matches!(err, ToolError::ExecutionFailed(_)));
    }
}

//! Built-in web search tool.

use crate::builtins::utils::parse_args;
use crate::{Tool, ToolContext};
use aria_config::SearchConfig;
use aria_protocol::ToolError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

/// Result limit used when neither config nor args set one.
const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Tool for web search queries.
#[derive(Debug)]
pub struct WebSearchTool {
    default_limit: usize,
}

impl WebSearchTool {
    /// Build the tool with the configured default result count.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            default_limit: config.max_results,
        }
    }
}

impl Default for WebSearchTool {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Arguments for WebSearchTool.
#[derive(Debug, Deserialize)]
struct WebSearchArgs {
    query: String,
    #[serde(default)]
    limit: Option<usize>,
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web for current information"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query to execute."
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of results to return."
                }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError> {
        let input: WebSearchArgs = parse_args(args)?;
        if input.query.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "query cannot be empty".to_string(),
            ));
        }
        let provider = ctx.services.search.as_ref().ok_or_else(|| {
            ToolError::ExecutionFailed("search provider not configured".to_string())
        })?;
        let limit = input.limit.unwrap_or(self.default_limit);
        let results = provider.search(&input.query, limit).await?;
        if results.is_empty() {
            return Ok(format!("No results found for \"{}\".", input.query));
        }

        let mut lines = Vec::with_capacity(results.len());
        for result in results {
            if result.url.is_empty() {
                lines.push(format!("{}: {}", result.title, result.snippet));
            } else {
                lines.push(format!(
                    "{}: {} ({})",
                    result.title, result.snippet, result.url
                ));
            }
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::WebSearchTool;
    use crate::providers::{SearchProvider, SearchResult};
    use crate::{Tool, ToolContext, ToolServices};
    use aria_config::SearchConfig;
    use aria_protocol::ToolError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct FixedSearch {
        results: Vec<SearchResult>,
    }

    #[async_trait]
    impl SearchProvider for FixedSearch {
        async fn search(
            &self,
            _query: &str,
            limit: usize,
        ) -> Result<Vec<SearchResult>, ToolError> {
            let mut results = self.results.clone();
            results.truncate(limit);
            Ok(results)
        }
    }

    fn ctx_with(results: Vec<SearchResult>) -> ToolContext {
        ToolContext::new(ToolServices {
            search: Some(Arc::new(FixedSearch { results })),
            ..ToolServices::default()
        })
    }

    #[tokio::test]
    async fn formats_results_as_plain_text() {
        let ctx = ctx_with(vec![SearchResult {
            title: "Linkin Park".to_string(),
            url: "https://example.com".to_string(),
            snippet: "American rock band".to_string(),
        }]);
        let text = WebSearchTool::default()
            .call(&ctx, json!({"query": "linkin park"}))
            .await
            .expect("result");
        assert_eq!(
            text,
            "Linkin Park: American rock band (https://example.com)"
        );
    }

    #[tokio::test]
    async fn configured_limit_caps_results_when_args_omit_one() {
        let result = |name: &str| SearchResult {
            title: name.to_string(),
            url: String::new(),
            snippet: name.to_string(),
        };
        let ctx = ctx_with(vec![result("one"), result("two"), result("three")]);
        let tool = WebSearchTool::from_config(&SearchConfig {
            max_results: 2,
            ..SearchConfig::default()
        });

        let text = tool
            .call(&ctx, json!({"query": "anything"}))
            .await
            .expect("result");
        assert_eq!(text.lines().count(), 2);
    }

    #[tokio::test]
    async fn empty_results_produce_a_friendly_message() {
        let ctx = ctx_with(Vec::new());
        let text = WebSearchTool::default()
            .call(&ctx, json!({"query": "nothing"}))
            .await
            .expect("result");
        assert!(text.contains("No results found"));
    }

    #[tokio::test]
    async fn empty_query_is_invalid() {
        let ctx = ctx_with(Vec::new());
        let err = WebSearchTool::default()
            .call(&ctx, json!({"query": ""}))
            .await
            .err()
            .expect("err");
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}

//! Web search provider interface and DuckDuckGo implementation.

use aria_config::SearchConfig;
use aria_protocol::ToolError;
use async_trait::async_trait;
use log::info;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Result title.
    pub title: String,
    /// Result URL.
    pub url: String,
    /// Result snippet.
    pub snippet: String,
}

/// Provider for web search queries.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a query and return up to `limit` results.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, ToolError>;
}

/// DuckDuckGo instant-answer provider (no API key required).
pub struct DuckDuckGoProvider {
    client: Client,
}

impl DuckDuckGoProvider {
    /// Create a provider with a fresh HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for DuckDuckGoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, ToolError> {
        let response = self
            .client
            .get("https://api.duckduckgo.com/")
            .query(&[("q", query), ("format", "json"), ("no_html", "1")])
            .send()
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;

        let data: Value = response
            .json()
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;

        let results = parse_instant_answers(&data, limit);
        info!(
            "web search (query_len={}, results={})",
            query.len(),
            results.len()
        );
        Ok(results)
    }
}

/// Extract results from a DuckDuckGo instant-answer payload.
///
/// The abstract (main answer) comes first, followed by related
/// topics, capped at `limit`.
fn parse_instant_answers(data: &Value, limit: usize) -> Vec<SearchResult> {
    let mut results = Vec::new();

    if let Some(abstract_text) = data.get("AbstractText").and_then(Value::as_str)
        && !abstract_text.is_empty()
    {
        results.push(SearchResult {
            title: data
                .get("Heading")
                .and_then(Value::as_str)
                .unwrap_or("Result")
                .to_string(),
            url: data
                .get("AbstractURL")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            snippet: abstract_text.to_string(),
        });
    }

    if let Some(topics) = data.get("RelatedTopics").and_then(Value::as_array) {
        for topic in topics {
            if results.len() >= limit {
                break;
            }
            if let Some(text) = topic.get("Text").and_then(Value::as_str) {
                results.push(SearchResult {
                    title: text.chars().take(80).collect(),
                    url: topic
                        .get("FirstURL")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    snippet: text.to_string(),
                });
            }
        }
    }

    results.truncate(limit);
    results
}

/// Build a search provider from the search config section.
pub fn search_provider_from_config(
    config: &SearchConfig,
) -> Result<Arc<dyn SearchProvider>, ToolError> {
    match config.provider.to_lowercase().as_str() {
        "duckduckgo" | "" => Ok(Arc::new(DuckDuckGoProvider::new())),
        other => Err(ToolError::ExecutionFailed(format!(
            "unknown search provider: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_instant_answers, search_provider_from_config};
    use aria_config::SearchConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn abstract_comes_before_related_topics() {
        let data = json!({
            "Heading": "Linkin Park",
            "AbstractText": "American rock band",
            "AbstractURL": "https://en.wikipedia.org/wiki/Linkin_Park",
            "RelatedTopics": [
                {"Text": "Hybrid Theory - debut album", "FirstURL": "https://example.com/ht"},
                {"Text": "Meteora - second album", "FirstURL": "https://example.com/m"}
            ]
        });

        let results = parse_instant_answers(&data, 5);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Linkin Park");
        assert_eq!(results[0].snippet, "American rock band");
        assert_eq!(results[1].url, "https://example.com/ht");
    }

    #[test]
    fn limit_caps_results_and_empty_payload_yields_none() {
        let data = json!({
            "AbstractText": "",
            "RelatedTopics": [
                {"Text": "one"}, {"Text": "two"}, {"Text": "three"}
            ]
        });
        assert_eq!(parse_instant_answers(&data, 2).len(), 2);
        assert_eq!(parse_instant_answers(&json!({}), 5).len(), 0);
    }

    #[test]
    fn provider_factory_rejects_unknown_names() {
        let config = SearchConfig::default();
        assert!(search_provider_from_config(&config).is_ok());

        let config = SearchConfig {
            provider: "altavista".to_string(),
            ..SearchConfig::default()
        };
        assert!(search_provider_from_config(&config).is_err());
    }
}

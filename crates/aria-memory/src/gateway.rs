//! Gateway interface and hosted-API client.

use crate::error::MemoryError;
use crate::model::MemoryRecord;
use aria_config::MemoryBackendConfig;
use aria_protocol::ChatMessage;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Gateway to a user-scoped long-term memory store.
///
/// Both operations are single network round trips: `fetch_all` runs
/// once before a session starts and `commit` once after it ends.
/// Callers own the degrade-gracefully policy; the gateway only
/// reports what happened.
#[async_trait]
pub trait MemoryGateway: Send + Sync {
    /// Fetch every stored memory for a user, in store order.
    ///
    /// No local pagination, filtering, or ranking; the result set is
    /// returned exactly as the store produced it.
    async fn fetch_all(&self, user_id: &str) -> Result<Vec<MemoryRecord>, MemoryError>;

    /// Append a batch of conversation turns to the store.
    ///
    /// Every call is an append; merge semantics belong to the remote
    /// store. Callers must not issue the call with an empty batch.
    async fn commit(&self, batch: &[ChatMessage], user_id: &str) -> Result<(), MemoryError>;
}

/// Client for a mem0-style hosted memory API.
pub struct HostedMemoryGateway {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct FetchResponse {
    results: Vec<MemoryRecord>,
}

impl HostedMemoryGateway {
    /// Create a gateway against the given base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Create a gateway from the memory backend config.
    ///
    /// Returns `Ok(None)` when the backend is disabled; sessions then
    /// run without memory seeding or commit.
    pub fn from_config(config: &MemoryBackendConfig) -> Result<Option<Self>, MemoryError> {
        if !config.enabled {
            debug!("memory backend disabled; no gateway built");
            return Ok(None);
        }
        let api_key = config.api_key.as_deref().ok_or(MemoryError::MissingApiKey)?;
        Ok(Some(Self::new(api_key, config.base_url.clone())))
    }

    /// Create a gateway from `MEM0_API_KEY` / `MEM0_BASE_URL`.
    pub fn from_env() -> Result<Self, MemoryError> {
        let api_key = std::env::var("MEM0_API_KEY").map_err(|_| MemoryError::MissingApiKey)?;
        let base_url = std::env::var("MEM0_BASE_URL")
            .unwrap_or_else(|_| aria_config::DEFAULT_MEMORY_BASE_URL.to_string());
        Ok(Self::new(api_key, base_url))
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.api_key)
    }
}

#[async_trait]
impl MemoryGateway for HostedMemoryGateway {
    async fn fetch_all(&self, user_id: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
        let response = self
            .client
            .get(format!("{}/memories/", self.base_url))
            .header("Authorization", self.auth_header())
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(|err| MemoryError::RemoteUnavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MemoryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: FetchResponse = response
            .json()
            .await
            .map_err(|err| MemoryError::Decode(err.to_string()))?;
        debug!(
            "fetched memories (user_id={}, count={})",
            user_id,
            body.results.len()
        );
        Ok(body.results)
    }

    async fn commit(&self, batch: &[ChatMessage], user_id: &str) -> Result<(), MemoryError> {
        let body = json!({
            "messages": batch,
            "user_id": user_id,
        });

        let response = self
            .client
            .post(format!("{}/memories/", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|err| MemoryError::RemoteUnavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MemoryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        info!(
            "committed memory batch (user_id={}, messages={})",
            user_id,
            batch.len()
        );
        Ok(())
    }
}

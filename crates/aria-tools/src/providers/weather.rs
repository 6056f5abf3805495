//! Weather provider interface and wttr.in implementation.

use aria_config::WeatherConfig;
use aria_protocol::ToolError;
use async_trait::async_trait;
use log::info;
use reqwest::Client;

/// Provider for short plain-text weather reports.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a city as one line of text.
    async fn current(&self, city: &str) -> Result<String, ToolError>;
}

/// Text-weather provider backed by a wttr.in style endpoint.
pub struct WttrWeatherProvider {
    client: Client,
    endpoint: String,
}

impl WttrWeatherProvider {
    /// Create a provider against the given endpoint base URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a provider from the weather config section.
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config.endpoint.clone())
    }
}

#[async_trait]
impl WeatherProvider for WttrWeatherProvider {
    async fn current(&self, city: &str) -> Result<String, ToolError> {
        // wttr.in accepts '+' for spaces in the city path segment.
        let city = city.trim().replace(' ', "+");
        let response = self
            .client
            .get(format!("{}/{}", self.endpoint, city))
            .query(&[("format", "3")])
            .send()
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::ExecutionFailed(format!(
                "weather endpoint returned status {}",
                status.as_u16()
            )));
        }

        let report = response
            .text()
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;
        let report = report.trim().to_string();
        info!("fetched weather (city={city}, report_len={})", report.len());
        Ok(report)
    }
}

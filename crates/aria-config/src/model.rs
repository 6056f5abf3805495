//! Configuration schema for the aria assistant.

use serde::{Deserialize, Serialize};

/// Default hosted memory API base URL.
pub const DEFAULT_MEMORY_BASE_URL: &str = "https://api.mem0.ai/v1";
/// Default text-weather endpoint.
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://wttr.in";
/// Default SMTP relay host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Root config for the aria SDK.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AriaConfig {
    /// User id used to scope memory fetch and commit.
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub memory: MemoryBackendConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl Default for AriaConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            memory: MemoryBackendConfig::default(),
            search: SearchConfig::default(),
            email: EmailConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl AriaConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> AriaConfigBuilder {
        AriaConfigBuilder::new()
    }
}

/// Builder for assembling an `AriaConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct AriaConfigBuilder {
    config: AriaConfig,
}

impl AriaConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: AriaConfig::default(),
        }
    }

    /// Replace the scoping user id.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.config.user_id = user_id.into();
        self
    }

    /// Replace the memory backend configuration.
    pub fn memory(mut self, memory: MemoryBackendConfig) -> Self {
        self.config.memory = memory;
        self
    }

    /// Replace the web search configuration.
    pub fn search(mut self, search: SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    /// Replace the email configuration.
    pub fn email(mut self, email: EmailConfig) -> Self {
        self.config.email = email;
        self
    }

    /// Replace the weather configuration.
    pub fn weather(mut self, weather: WeatherConfig) -> Self {
        self.config.weather = weather;
        self
    }

    /// Finish building and return the config.
    pub fn build(self) -> AriaConfig {
        self.config
    }
}

/// Hosted memory store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryBackendConfig {
    /// Whether a gateway is built at all; when false,
    /// `HostedMemoryGateway::from_config` yields no gateway and the
    /// session runs without seeding or commit.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// API key for the hosted store.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL for the hosted store.
    #[serde(default = "default_memory_base_url")]
    pub base_url: String,
}

impl Default for MemoryBackendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: default_memory_base_url(),
        }
    }
}

/// Web search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Search provider name (currently "duckduckgo").
    #[serde(default = "default_search_provider")]
    pub provider: String,
    /// Result count used when a query does not ask for one.
    #[serde(default = "default_search_limit")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: default_search_provider(),
            max_results: default_search_limit(),
        }
    }
}

/// Outbound email configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailConfig {
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// Sending account user name.
    #[serde(default)]
    pub user: Option<String>,
    /// App password for the sending account.
    #[serde(default)]
    pub app_password: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            user: None,
            app_password: None,
        }
    }
}

impl EmailConfig {
    /// Return the configured credentials when both parts are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.user.as_deref(), self.app_password.as_deref()) {
            (Some(user), Some(password)) => Some((user, password)),
            _ => None,
        }
    }
}

/// Weather endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherConfig {
    /// Base URL of the text-weather endpoint.
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_weather_endpoint(),
        }
    }
}

fn default_user_id() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_memory_base_url() -> String {
    DEFAULT_MEMORY_BASE_URL.to_string()
}

fn default_search_provider() -> String {
    "duckduckgo".to_string()
}

fn default_search_limit() -> usize {
    5
}

fn default_smtp_host() -> String {
    DEFAULT_SMTP_HOST.to_string()
}

fn default_weather_endpoint() -> String {
    DEFAULT_WEATHER_ENDPOINT.to_string()
}

#[cfg(test)]
mod tests {
    use super::{AriaConfig, EmailConfig, MemoryBackendConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_fill_every_section() {
        let config = AriaConfig::default();
        assert_eq!(config.user_id, "default");
        assert!(config.memory.enabled);
        assert_eq!(config.memory.base_url, "https://api.mem0.ai/v1");
        assert_eq!(config.search.provider, "duckduckgo");
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.email.smtp_host, "smtp.gmail.com");
        assert_eq!(config.weather.endpoint, "https://wttr.in");
    }

    #[test]
    fn builder_overrides_sections() {
        let config = AriaConfig::builder()
            .user_id("brice")
            .memory(MemoryBackendConfig {
                api_key: Some("key".to_string()),
                ..MemoryBackendConfig::default()
            })
            .build();
        assert_eq!(config.user_id, "brice");
        assert_eq!(config.memory.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn email_credentials_require_both_parts() {
        let mut email = EmailConfig::default();
        assert_eq!(email.credentials(), None);
        email.user = Some("me@example.com".to_string());
        assert_eq!(email.credentials(), None);
        email.app_password = Some("secret".to_string());
        assert_eq!(email.credentials(), Some(("me@example.com", "secret")));
    }
}

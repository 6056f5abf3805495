//! Config file loading and environment overrides.

use crate::error::ConfigError;
use crate::model::AriaConfig;
use log::{debug, info};
use std::path::Path;

/// Load a json5 config file from disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<AriaConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let config: AriaConfig = json5::from_str(&raw)?;
    info!("loaded config file (path={})", path.display());
    Ok(config)
}

/// Build a config from an optional file plus environment overrides.
///
/// Also loads a `.env` file from the working directory when present,
/// so hosted-store and mail credentials can live outside the shell.
pub fn from_env(path: Option<&Path>) -> Result<AriaConfig, ConfigError> {
    load_dotenv();
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => AriaConfig::default(),
    };
    apply_env(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Load a `.env` file if one exists; missing files are not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("loaded .env (path={})", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => debug!("skipped .env (reason={err})"),
    }
}

/// Apply environment overrides through a lookup function.
///
/// The lookup indirection keeps this testable without mutating
/// process-wide environment state.
pub(crate) fn apply_env<F>(config: &mut AriaConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(user_id) = lookup("ARIA_USER_ID") {
        config.user_id = user_id;
    }
    if let Some(api_key) = lookup("MEM0_API_KEY") {
        config.memory.api_key = Some(api_key);
    }
    if let Some(base_url) = lookup("MEM0_BASE_URL") {
        config.memory.base_url = base_url;
    }
    if let Some(provider) = lookup("SEARCH_PROVIDER") {
        config.search.provider = provider;
    }
    if let Some(limit) = lookup("SEARCH_MAX_RESULTS")
        && let Ok(limit) = limit.parse()
    {
        config.search.max_results = limit;
    }
    if let Some(user) = lookup("GMAIL_USER") {
        config.email.user = Some(user);
    }
    if let Some(password) = lookup("GMAIL_APP_PASSWORD") {
        config.email.app_password = Some(password);
    }
    if let Some(host) = lookup("SMTP_HOST") {
        config.email.smtp_host = host;
    }
    if let Some(endpoint) = lookup("WEATHER_ENDPOINT") {
        config.weather.endpoint = endpoint;
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_env, load_file};
    use crate::model::AriaConfig;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_file_parses_json5_with_defaults() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                // personal assistant setup
                user_id: "brice",
                memory: {{ base_url: "http://localhost:8080/v1" }},
            }}"#
        )
        .expect("write");

        let config = load_file(file.path()).expect("load");
        assert_eq!(config.user_id, "brice");
        assert_eq!(config.memory.base_url, "http://localhost:8080/v1");
        assert!(config.memory.enabled);
        assert_eq!(config.search.provider, "duckduckgo");
    }

    #[test]
    fn load_file_rejects_malformed_input() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{{ user_id: }}").expect("write");
        assert!(load_file(file.path()).is_err());
    }

    #[test]
    fn env_overrides_take_precedence() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("ARIA_USER_ID", "brice"),
            ("MEM0_API_KEY", "m0-key"),
            ("GMAIL_USER", "me@example.com"),
            ("GMAIL_APP_PASSWORD", "app-pass"),
            ("SEARCH_PROVIDER", "duckduckgo"),
            ("SEARCH_MAX_RESULTS", "8"),
        ]);
        let mut config = AriaConfig::default();
        apply_env(&mut config, |key| {
            vars.get(key).map(|value| value.to_string())
        });

        assert_eq!(config.user_id, "brice");
        assert_eq!(config.memory.api_key.as_deref(), Some("m0-key"));
        assert_eq!(config.search.max_results, 8);
        assert_eq!(
            config.email.credentials(),
            Some(("me@example.com", "app-pass"))
        );
    }

    #[test]
    fn non_numeric_search_limit_is_ignored() {
        let mut config = AriaConfig::default();
        apply_env(&mut config, |key| {
            (key == "SEARCH_MAX_RESULTS").then(|| "many".to_string())
        });
        assert_eq!(config.search.max_results, 5);
    }

    #[test]
    fn missing_env_leaves_defaults() {
        let mut config = AriaConfig::default();
        apply_env(&mut config, |_| None);
        assert_eq!(config, AriaConfig::default());
    }
}

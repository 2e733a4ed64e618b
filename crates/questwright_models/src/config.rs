//! Connection settings for the completion endpoint.

use questwright_error::ConfigError;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Public OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Where to send completions and how to authenticate.
///
/// The key is never logged; `Debug` redacts it.
#[derive(Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct ClientConfig {
    /// API root without trailing slash (e.g., "https://api.openai.com/v1")
    base_url: String,
    /// Bearer token
    #[getter(skip)]
    api_key: String,
}

impl ClientConfig {
    /// Create a configuration for an explicit endpoint.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required, must be non-blank)
    /// - `OPENAI_BASE_URL` (default: "https://api.openai.com/v1")
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the key is missing or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_named(API_KEY_ENV)
    }

    /// Like [`ClientConfig::from_env`], reading the key from `key_var`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the variable is missing or blank.
    pub fn from_env_named(key_var: &str) -> Result<Self, ConfigError> {
        let api_key = std::env::var(key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new(format!("{} not set", key_var)))?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(base_url, api_key))
    }

    /// Replace the base URL.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self::new(base_url, self.api_key)
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Full URL of the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:8080/v1/", "sk-test");
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn debug_hides_key() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, "sk-secret");
        let shown = format!("{:?}", config);
        assert!(!shown.contains("sk-secret"));
        assert!(shown.contains("redacted"));
    }

    #[test]
    fn missing_key_fails_fast() {
        let err = ClientConfig::from_env_named("QUESTWRIGHT_TEST_UNSET_KEY").unwrap_err();
        assert!(err.message.contains("QUESTWRIGHT_TEST_UNSET_KEY"));
    }
}

//! Service configuration.
//!
//! Loaded from TOML with a precedence system:
//! - Bundled defaults (include_str! from questwright.toml)
//! - User overrides (~/.config/questwright/questwright.toml, then ./questwright.toml)
//! - Automatic merging with user values taking precedence

use questwright_core::{DEFAULT_MAX_SCENES, ModelSelection};
use questwright_error::{ConfigError, QuestwrightError, QuestwrightResult};
use questwright_models::{API_KEY_ENV, ClientConfig};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../questwright.toml");

/// Where the HTTP service listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    /// `host:port`, ready for a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Knobs applied to every generation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSettings {
    /// Sampling temperature
    pub temperature: f32,
    /// Timeline capacity
    pub max_scenes: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_scenes: DEFAULT_MAX_SCENES,
        }
    }
}

/// Completion endpoint settings. The key itself is only ever read from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// API root; falls back to `OPENAI_BASE_URL`, then the public endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Name of the environment variable holding the key
    pub api_key_env: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key_env: API_KEY_ENV.to_string(),
        }
    }
}

impl ProviderSettings {
    /// Resolve connection settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the key variable is unset or blank.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let config = ClientConfig::from_env_named(&self.api_key_env)?;
        Ok(match &self.base_url {
            Some(url) => config.with_base_url(url.as_str()),
            None => config,
        })
    }
}

/// Top-level Questwright configuration.
///
/// # Example
///
/// ```no_run
/// use questwright_server::QuestwrightConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = QuestwrightConfig::load()?;
/// println!("Listening on {}", config.server.bind_address());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct QuestwrightConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerSettings,

    /// Generation knobs
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Completion endpoint
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Model profiles by detail tier
    #[serde(default)]
    pub models: ModelSelection,
}

impl QuestwrightConfig {
    /// Load configuration from a specific file path.
    ///
    /// Sections missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> QuestwrightResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                QuestwrightError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                QuestwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (questwright.toml shipped with the library)
    /// 2. User config in home directory (~/.config/questwright/questwright.toml)
    /// 3. User config in current directory (./questwright.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> QuestwrightResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/questwright/questwright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("questwright").required(false));

        Self::finish(builder)
    }

    /// Bundled defaults with one explicit override file on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the override cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_with_override(path: impl AsRef<std::path::Path>) -> QuestwrightResult<Self> {
        debug!("Loading bundled defaults with explicit override");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> QuestwrightResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                QuestwrightError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                QuestwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check ranges the types cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::new(format!(
                "generation.temperature must be between 0.0 and 2.0, got {}",
                self.generation.temperature
            )));
        }
        if self.generation.max_scenes == 0 {
            return Err(ConfigError::new("generation.max_scenes must be at least 1"));
        }
        if self.provider.api_key_env.trim().is_empty() {
            return Err(ConfigError::new("provider.api_key_env must not be empty"));
        }
        self.models
            .validate()
            .map_err(|reason| ConfigError::new(format!("models: {}", reason)))
    }
}

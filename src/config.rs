use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for talking to the recipe search service
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// API key sent as the `X-Api-Key` header
    pub api_key: String,
    /// Base URL of the recipe service (overridable for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Optional HTTP basic-auth credentials
    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,
}

/// HTTP basic-auth credentials
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: Option<String>,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.api-ninjas.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl SearchConfig {
    /// Build a configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        SearchConfig {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout: default_timeout(),
            basic_auth: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password,
        });
        self
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPES__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPES__API_KEY, RECIPES__BASIC_AUTH__USERNAME
///
/// Fails if no API key is present in any source, or if it is blank.
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPES__BASIC_AUTH__USERNAME
        .add_source(
            Environment::with_prefix("RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: SearchConfig = settings.try_deserialize()?;
    if config.api_key.trim().is_empty() {
        return Err(ConfigError::Message("api_key must not be empty".to_string()));
    }
    Ok(config)
}

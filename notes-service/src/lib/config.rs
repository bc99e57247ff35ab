use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use serde::Deserialize;
use serde::Deserializer;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub tokens: TokenConfig,
    #[serde(default)]
    pub cookies: CookieConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Signing secrets, one per token class.
#[derive(Debug, Deserialize)]
pub struct TokenConfig {
    #[serde(deserialize_with = "secret_string")]
    pub access_secret: SecretString,
    #[serde(deserialize_with = "secret_string")]
    pub refresh_secret: SecretString,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct CookieConfig {
    /// Mark session cookies `Secure`; enable behind TLS
    #[serde(default)]
    pub secure: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_connections() -> u32 {
    5
}

fn secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TOKENS__ACCESS_SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // DATABASE__URL=postgres://... overrides database.url
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        configuration.try_deserialize::<Config>()?.validate()
    }

    /// Reject settings the service cannot run safely with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        self.tokens.validate()?;
        Ok(self)
    }
}

impl TokenConfig {
    /// Token classes are distinguished only by their signing secret, so
    /// both must be present and they must differ.
    fn validate(&self) -> Result<(), ConfigError> {
        let access = self.access_secret.expose_secret();
        let refresh = self.refresh_secret.expose_secret();

        if access.trim().is_empty() {
            return Err(ConfigError::Message(
                "tokens.access_secret must not be empty".to_string(),
            ));
        }
        if refresh.trim().is_empty() {
            return Err(ConfigError::Message(
                "tokens.refresh_secret must not be empty".to_string(),
            ));
        }
        if access == refresh {
            return Err(ConfigError::Message(
                "tokens.access_secret and tokens.refresh_secret must differ".to_string(),
            ));
        }

        Ok(())
    }
}

use std::path::Path;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProvider {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub provider: DatabaseProvider,
    #[serde(default)]
    pub url: String,
    pub max_connections: u32,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub root: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout_seconds: u64,
    #[serde(default)]
    pub providers: Vec<ProviderSettings>,
}

/// One OpenAI-compatible completion provider, tried in the listed order.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub name: String,
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the key when `api_key` is not set inline.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub referer: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ProviderSettings {
    /// Inline key first, then the named environment variable. Blank values
    /// count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| {
                self.api_key_env
                    .as_deref()
                    .and_then(|var| std::env::var(var).ok())
            })
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    InvalidEnvironment(String),
}

impl Settings {
    /// Reads `.env`, picks the environment from `APP_ENVIRONMENT` and loads
    /// the settings files from the working directory.
    pub fn load() -> Result<(Environment, Self), SettingsError> {
        dotenvy::dotenv().ok();

        let environment: Environment = std::env::var(ENVIRONMENT_VAR)
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(SettingsError::InvalidEnvironment)?;

        let settings = Self::load_from(Path::new("."), environment)?;
        Ok((environment, settings))
    }

    /// Layers `appsettings.toml`, `appsettings.{environment}.toml` and
    /// `APP_`-prefixed variables (`APP_SERVER__PORT` sets `server.port`).
    pub fn load_from(dir: &Path, environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(File::from(dir.join("appsettings.toml")).required(false))
            .add_source(
                File::from(dir.join(format!("appsettings.{}.toml", environment.file_suffix())))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}

fn default_true() -> bool {
    true
}

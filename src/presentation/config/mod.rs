mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseProvider, DatabaseSettings, ENVIRONMENT_VAR, LlmSettings, LoggingSettings,
    ProviderSettings, ServerSettings, Settings, SettingsError, StorageSettings,
};

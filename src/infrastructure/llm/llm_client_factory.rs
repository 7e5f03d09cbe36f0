use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::LlmSettings;

use super::{CompletionOptions, OpenAiCompatibleClient};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("provider {0} has a credential but no models")]
    NoModels(String),
    #[error("provider {provider} could not be initialized: {source}")]
    InitializationFailed {
        provider: String,
        source: LlmClientError,
    },
}

impl LlmClientFactory {
    /// One client per provider that has a credential, in configuration order.
    /// Providers without a credential are skipped.
    pub fn create_all(
        settings: &LlmSettings,
    ) -> Result<Vec<Arc<dyn LlmClient>>, LlmClientFactoryError> {
        let options = CompletionOptions {
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            top_p: settings.top_p,
            timeout: Duration::from_secs(settings.timeout_seconds),
        };

        let mut clients: Vec<Arc<dyn LlmClient>> = Vec::new();

        for provider in &settings.providers {
            let Some(api_key) = provider.resolve_api_key() else {
                tracing::info!(provider = %provider.name, "No credential configured, skipping provider");
                continue;
            };

            if provider.models.is_empty() {
                return Err(LlmClientFactoryError::NoModels(provider.name.clone()));
            }

            let client = OpenAiCompatibleClient::new(
                provider.name.clone(),
                provider.base_url.clone(),
                api_key,
                provider.models.clone(),
                options.clone(),
            )
            .map_err(|source| LlmClientFactoryError::InitializationFailed {
                provider: provider.name.clone(),
                source,
            })?
            .with_attribution(provider.referer.clone(), provider.title.clone());

            tracing::info!(
                provider = %provider.name,
                models = ?provider.models,
                "Completion provider configured"
            );
            clients.push(Arc::new(client));
        }

        Ok(clients)
    }
}

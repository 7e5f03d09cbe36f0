mod llm_client_factory;
mod openai_compatible_client;

pub use llm_client_factory::{LlmClientFactory, LlmClientFactoryError};
pub use openai_compatible_client::{CompletionOptions, OpenAiCompatibleClient};

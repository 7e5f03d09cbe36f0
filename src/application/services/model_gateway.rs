use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ports::LlmClient;
use crate::domain::AdviceRequest;

use super::heuristic_responder::heuristic_answer;
use super::prompt_builder::build_prompt;
use super::response_cleaner::clean_completion;

/// Which path produced an answer. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    Model { provider: String },
    Heuristic,
}

#[derive(Debug, Clone)]
pub struct GatewayAnswer {
    pub text: String,
    pub source: AnswerSource,
}

/// Tries completion providers in order and falls back to the heuristic
/// responder, so `respond` always yields a non-empty answer.
pub struct ModelGateway {
    providers: Vec<Arc<dyn LlmClient>>,
}

impl ModelGateway {
    pub fn new(providers: Vec<Arc<dyn LlmClient>>) -> Self {
        Self { providers }
    }

    pub fn heuristic_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    #[tracing::instrument(skip(self, request), fields(category = %request.category, files = request.file_texts.len()))]
    pub async fn respond(&self, request: &AdviceRequest) -> GatewayAnswer {
        if self.providers.is_empty() {
            warn!("No completion provider configured, answering heuristically");
            return Self::heuristic(request);
        }

        let prompt = build_prompt(request);

        for provider in &self.providers {
            let name = provider.provider_name();
            match provider.complete(&prompt).await {
                Ok(raw) => {
                    let text = clean_completion(&raw);
                    if text.is_empty() {
                        warn!(provider = %name, "Completion was empty after cleaning");
                        continue;
                    }
                    info!(provider = %name, answer_chars = text.chars().count(), "Answered by model");
                    return GatewayAnswer {
                        text,
                        source: AnswerSource::Model {
                            provider: name.to_string(),
                        },
                    };
                }
                Err(e) => {
                    warn!(provider = %name, error = %e, "Completion provider failed");
                }
            }
        }

        warn!("All completion providers failed, answering heuristically");
        Self::heuristic(request)
    }

    fn heuristic(request: &AdviceRequest) -> GatewayAnswer {
        GatewayAnswer {
            text: heuristic_answer(request),
            source: AnswerSource::Heuristic,
        }
    }
}

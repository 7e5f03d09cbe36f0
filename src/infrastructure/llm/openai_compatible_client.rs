use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ports::{LlmClient, LlmClientError};

const ERROR_BODY_LIMIT: usize = 200;

/// Chat-completions client for any OpenAI-compatible API. Each configured
/// model is tried in order until one returns usable text.
pub struct OpenAiCompatibleClient {
    client: Client,
    name: String,
    base_url: String,
    api_key: String,
    models: Vec<String>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    referer: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<ProviderError>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ProviderError {
    #[serde(default)]
    message: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl OpenAiCompatibleClient {
    pub fn new(
        name: String,
        base_url: String,
        api_key: String,
        models: Vec<String>,
        options: CompletionOptions,
    ) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            name,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            models,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            top_p: options.top_p,
            referer: None,
            title: None,
        })
    }

    /// Attribution headers (`HTTP-Referer`, `X-Title`) some gateways expect.
    pub fn with_attribution(mut self, referer: Option<String>, title: Option<String>) -> Self {
        self.referer = referer;
        self.title = title;
        self
    }

    async fn complete_with_model(&self, model: &str, prompt: &str) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
        };

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body);
        if let Some(referer) = &self.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            request = request.header("X-Title", title);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(LlmClientError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        parse_completion(&body)
    }
}

/// Extracts the first choice's text from a `200` response body.
fn parse_completion(body: &str) -> Result<String, LlmClientError> {
    let parsed: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

    if let Some(error) = parsed.error {
        return Err(LlmClientError::Provider {
            message: error.message,
            kind: error.kind.unwrap_or_default(),
        });
    }

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmClientError::InvalidResponse("no choices".to_string()))?;

    let content = choice.message.content.unwrap_or_default();
    let content = content.trim();
    if content.is_empty() {
        return Err(LlmClientError::EmptyCompletion);
    }
    Ok(content.to_string())
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let mut last_error = None;

        for model in &self.models {
            debug!(provider = %self.name, model = %model, "Requesting completion");
            match self.complete_with_model(model, prompt).await {
                Ok(text) => {
                    debug!(provider = %self.name, model = %model, "Model answered");
                    return Ok(text);
                }
                Err(e) => {
                    warn!(provider = %self.name, model = %model, error = %e, "Model failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(LlmClientError::AllModelsFailed(Box::new(e))),
            None => Err(LlmClientError::NoModelsConfigured),
        }
    }
}

use async_trait::async_trait;

/// A chat-completion provider. Implementations walk their own model list and
/// return the first non-empty completion.
#[async_trait]
pub trait LlmClient: Send + Sync {
    fn provider_name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("provider error: {message} (type: {kind})")]
    Provider { message: String, kind: String },
    #[error("empty completion")]
    EmptyCompletion,
    #[error("no models configured")]
    NoModelsConfigured,
    #[error("all models failed, last error: {0}")]
    AllModelsFailed(Box<LlmClientError>),
}

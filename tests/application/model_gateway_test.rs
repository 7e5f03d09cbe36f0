use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::StatusCode;

use bizadvisor::application::ports::{LlmClient, LlmClientError};
use bizadvisor::application::services::{AnswerSource, ModelGateway, heuristic_answer};
use bizadvisor::domain::AdviceRequest;
use bizadvisor::infrastructure::llm::OpenAiCompatibleClient;

use crate::helpers::mock_provider::{ModelReply, TEST_API_KEY, spawn_provider, test_options};

struct ScriptedClient {
    name: &'static str,
    reply: Result<&'static str, ()>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    fn answering(name: &'static str, text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: Ok(text),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: Err(()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    fn provider_name(&self) -> &str {
        self.name
    }

    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .map(str::to_string)
            .map_err(|_| LlmClientError::RateLimited)
    }
}

fn request() -> AdviceRequest {
    AdviceRequest::new("How do I keep the growth going?", "growth")
        .with_file_texts(vec!["File: a.txt\nRevenue grew 10%".to_string()])
}

#[tokio::test]
async fn given_no_providers_when_responding_then_answers_heuristically() {
    let gateway = ModelGateway::heuristic_only();

    let answer = gateway.respond(&request()).await;

    assert_eq!(answer.source, AnswerSource::Heuristic);
    assert_eq!(answer.text, heuristic_answer(&request()));
}

#[tokio::test]
async fn given_failing_first_provider_when_responding_then_next_provider_answers() {
    let broken = ScriptedClient::failing("primary");
    let backup = ScriptedClient::answering("backup", "  Open a second shop.  ");
    let gateway = ModelGateway::new(vec![
        broken.clone() as Arc<dyn LlmClient>,
        backup.clone() as Arc<dyn LlmClient>,
    ]);

    let answer = gateway.respond(&request()).await;

    assert_eq!(answer.text, "Open a second shop.");
    assert_eq!(
        answer.source,
        AnswerSource::Model {
            provider: "backup".to_string()
        }
    );
    assert_eq!(broken.calls.load(Ordering::SeqCst), 1);
    assert_eq!(backup.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_completion_empty_after_cleaning_when_responding_then_falls_back() {
    let noisy = ScriptedClient::answering("noisy", "<s>[INST][/INST]</s>");
    let gateway = ModelGateway::new(vec![noisy as Arc<dyn LlmClient>]);

    let answer = gateway.respond(&request()).await;

    assert_eq!(answer.source, AnswerSource::Heuristic);
    assert!(!answer.text.is_empty());
}

#[tokio::test]
async fn given_all_providers_failing_when_responding_then_answers_heuristically() {
    let gateway = ModelGateway::new(vec![
        ScriptedClient::failing("a") as Arc<dyn LlmClient>,
        ScriptedClient::failing("b") as Arc<dyn LlmClient>,
    ]);

    let answer = gateway.respond(&request()).await;

    assert_eq!(answer.source, AnswerSource::Heuristic);
    assert!(answer.text.contains("Revenue grew 10%"));
}

#[tokio::test]
async fn given_http_provider_echoing_prompt_when_responding_then_answer_is_cleaned() {
    let base_url = spawn_provider(vec![ModelReply::answer(
        "free-model",
        "START YOUR ANSWER:\n═══════\nRaise prices!!!!!",
    )])
    .await;
    let client = OpenAiCompatibleClient::new(
        "openrouter".to_string(),
        base_url,
        TEST_API_KEY.to_string(),
        vec!["free-model".to_string()],
        test_options(),
    )
    .unwrap();
    let gateway = ModelGateway::new(vec![Arc::new(client) as Arc<dyn LlmClient>]);

    let answer = gateway.respond(&request()).await;

    assert_eq!(answer.text, "Raise prices!!!");
    assert_eq!(
        answer.source,
        AnswerSource::Model {
            provider: "openrouter".to_string()
        }
    );
}

#[tokio::test]
async fn given_http_provider_returning_error_field_when_responding_then_falls_back() {
    let base_url = spawn_provider(vec![ModelReply::error_field("free-model", "quota exceeded")]).await;
    let client = OpenAiCompatibleClient::new(
        "openrouter".to_string(),
        base_url,
        TEST_API_KEY.to_string(),
        vec!["free-model".to_string()],
        test_options(),
    )
    .unwrap();
    let gateway = ModelGateway::new(vec![Arc::new(client) as Arc<dyn LlmClient>]);

    let answer = gateway.respond(&request()).await;

    assert_eq!(answer.source, AnswerSource::Heuristic);
}

#[tokio::test]
async fn given_unreachable_provider_when_responding_then_falls_back() {
    let client = OpenAiCompatibleClient::new(
        "offline".to_string(),
        "http://127.0.0.1:1".to_string(),
        TEST_API_KEY.to_string(),
        vec!["any".to_string()],
        test_options(),
    )
    .unwrap();
    let gateway = ModelGateway::new(vec![Arc::new(client) as Arc<dyn LlmClient>]);

    let answer = gateway.respond(&request()).await;

    assert_eq!(answer.source, AnswerSource::Heuristic);
    assert!(!answer.text.is_empty());
}

#[tokio::test]
async fn given_rate_limited_model_when_completing_then_next_model_is_tried() {
    let base_url = spawn_provider(vec![
        ModelReply::status("busy-model", StatusCode::TOO_MANY_REQUESTS),
        ModelReply::answer("spare-model", "Cut delivery costs."),
    ])
    .await;
    let client = OpenAiCompatibleClient::new(
        "openrouter".to_string(),
        base_url,
        TEST_API_KEY.to_string(),
        vec!["busy-model".to_string(), "spare-model".to_string()],
        test_options(),
    )
    .unwrap();

    let text = client.complete("prompt").await.unwrap();

    assert_eq!(text, "Cut delivery costs.");
}

use bizadvisor::application::ports::LlmClient;
use bizadvisor::infrastructure::llm::{LlmClientFactory, LlmClientFactoryError};
use bizadvisor::presentation::config::{LlmSettings, ProviderSettings};

fn provider(name: &str, api_key: Option<&str>, models: &[&str]) -> ProviderSettings {
    ProviderSettings {
        name: name.to_string(),
        base_url: "https://openrouter.ai/api/v1".to_string(),
        api_key: api_key.map(str::to_string),
        api_key_env: None,
        models: models.iter().map(|m| m.to_string()).collect(),
        referer: Some("http://localhost:3000".to_string()),
        title: Some("Business Advisor".to_string()),
    }
}

fn settings(providers: Vec<ProviderSettings>) -> LlmSettings {
    LlmSettings {
        max_tokens: 2000,
        temperature: 0.7,
        top_p: 0.9,
        timeout_seconds: 60,
        providers,
    }
}

#[test]
fn given_providers_without_credentials_when_creating_then_all_are_skipped() {
    let clients = LlmClientFactory::create_all(&settings(vec![
        provider("openrouter", None, &["free-model"]),
        provider("backup", Some("   "), &["free-model"]),
    ]))
    .unwrap();

    assert!(clients.is_empty());
}

#[test]
fn given_credentialed_providers_when_creating_then_keeps_configured_order() {
    let clients = LlmClientFactory::create_all(&settings(vec![
        provider("first", Some("key-1"), &["a"]),
        provider("skipped", None, &["b"]),
        provider("second", Some("key-2"), &["c", "d"]),
    ]))
    .unwrap();

    let names: Vec<&str> = clients.iter().map(|c| c.provider_name()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn given_credential_without_models_when_creating_then_fails() {
    let result = LlmClientFactory::create_all(&settings(vec![provider(
        "openrouter",
        Some("key"),
        &[],
    )]));

    assert!(matches!(result, Err(LlmClientFactoryError::NoModels(name)) if name == "openrouter"));
}

#[test]
fn given_key_in_named_env_var_when_resolving_then_uses_it() {
    let var = "BIZADVISOR_TEST_PROVIDER_KEY_7F3A";
    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var(var, " env-key ") };
    let mut settings = provider("openrouter", None, &["m"]);
    settings.api_key_env = Some(var.to_string());

    assert_eq!(settings.resolve_api_key().as_deref(), Some("env-key"));

    settings.api_key = Some("inline".to_string());
    assert_eq!(settings.resolve_api_key().as_deref(), Some("inline"));
}

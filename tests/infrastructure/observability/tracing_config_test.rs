use bizadvisor::infrastructure::observability::{TracingConfig, sanitize_prompt};
use bizadvisor::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_copies_level_and_format() {
    let logging = LoggingSettings {
        level: "warn,bizadvisor=info".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, Environment::Prod);
    assert_eq!(config.default_filter, "warn,bizadvisor=info");
    assert!(config.json_format);
}

#[test]
fn given_blank_prompt_when_sanitizing_then_marks_it_empty() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_bearer_token_when_sanitizing_then_masks_it() {
    let sanitized = sanitize_prompt("call with Bearer sk-secret please");

    assert_eq!(sanitized, "call with Bearer [REDACTED] please");
}

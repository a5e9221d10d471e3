use mini_rag::infrastructure::observability::{REQUEST_ID_HEADER, TracingConfig, sanitize_prompt};

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Which documents mention pgvector?";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_multibyte_prompt_when_truncating_then_cuts_on_char_boundary() {
    let prompt = "ب".repeat(120);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"ب".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer sk-abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_every_occurrence_is_redacted() {
    let result = sanitize_prompt("api_key=one&api_key=two password=three");
    assert!(!result.contains("one"));
    assert!(!result.contains("two"));
    assert!(!result.contains("three"));
    assert_eq!(result.matches("[REDACTED]").count(), 3);
}

#[test]
fn given_default_config_when_created_then_environment_and_filter_are_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert!(config.default_directives.contains("mini_rag=debug"));
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

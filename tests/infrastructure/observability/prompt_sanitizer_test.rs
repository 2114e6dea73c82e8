use study_helper::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt("   \n\t"), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_prompt() {
    assert_eq!(sanitize_prompt("  Summarize this  "), "Summarize this");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_and_reports_length() {
    let prompt = "a".repeat(250);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.ends_with("... (250 chars total)"));
}

#[test]
fn given_long_multibyte_prompt_when_sanitizing_then_cuts_on_char_boundary() {
    let prompt = "é".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("(150 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_it() {
    let sanitized = sanitize_prompt("header Bearer sk-or-v1-abcdef and more");

    assert_eq!(sanitized, "header Bearer [REDACTED] and more");
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_each() {
    let sanitized = sanitize_prompt("api_key=one&x=1 api_key=two");

    assert_eq!(sanitized, "api_key=[REDACTED]&x=1 api_key=[REDACTED]");
}

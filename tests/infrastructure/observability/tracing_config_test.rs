use study_helper::infrastructure::observability::TracingConfig;
use study_helper::presentation::config::{Environment, LoggingSettings};

fn logging(level: &str, enable_json: bool) -> LoggingSettings {
    LoggingSettings {
        level: level.to_string(),
        enable_json,
    }
}

#[test]
fn given_logging_settings_when_building_config_then_uses_level_and_format() {
    let config = TracingConfig::with_log_format(Environment::Prod, &logging("warn", true), None);

    assert!(config.json_format);
    assert_eq!(config.environment, "Prod");
    assert!(config.default_filter.starts_with("warn,"));
    assert!(config.default_filter.contains("study_helper=debug"));
}

#[test]
fn given_log_format_json_when_building_config_then_enables_json_output() {
    let config =
        TracingConfig::with_log_format(Environment::Local, &logging("info", false), Some("JSON"));

    assert!(config.json_format);
}

#[test]
fn given_other_log_format_when_building_config_then_keeps_plain_text() {
    let config =
        TracingConfig::with_log_format(Environment::Local, &logging("info", false), Some("pretty"));

    assert!(!config.json_format);
}

#[test]
fn given_no_log_format_when_building_config_then_follows_settings() {
    let config = TracingConfig::with_log_format(Environment::Test, &logging("debug", false), None);

    assert!(!config.json_format);
    assert!(config.default_filter.starts_with("debug,"));
}

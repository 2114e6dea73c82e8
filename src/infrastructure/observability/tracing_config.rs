use crate::presentation::config::{Environment, LoggingSettings};

pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    /// `RUST_LOG` still wins over `logging.level` when set, and
    /// `LOG_FORMAT=json` switches to JSON output on top of `logging.enable_json`.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let log_format = std::env::var(LOG_FORMAT_VAR).ok();
        Self::with_log_format(environment, logging, log_format.as_deref())
    }

    pub fn with_log_format(
        environment: Environment,
        logging: &LoggingSettings,
        log_format: Option<&str>,
    ) -> Self {
        let json_requested = log_format.is_some_and(|format| format.eq_ignore_ascii_case("json"));

        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json || json_requested,
            default_filter: format!("{},study_helper=debug,tower_http=debug", logging.level),
        }
    }
}

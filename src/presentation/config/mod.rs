mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    API_KEY_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, LlmSettings, LoggingSettings, ServerSettings,
    Settings,
};

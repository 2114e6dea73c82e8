use std::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};

/// Canned-response client for tests and local runs without an API key.
/// Records every prompt pair it receives.
pub struct MockLlmClient {
    outcome: Result<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockLlmClient {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            outcome: Ok(response.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompt pairs received so far, as `(system, user)`.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((system_prompt.to_string(), user_prompt.to_string()));
        }

        self.outcome
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }
}

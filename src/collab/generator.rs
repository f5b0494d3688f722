//! LLM-backed question generator.
//!
//! Speaks the OpenAI-compatible chat-completions wire format so it works
//! against hosted providers and local inference servers alike. Entirely
//! optional: when no generator is configured the selector runs on the
//! predefined bank.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::collab::QuestionGenerator;
use crate::error::GenerateError;

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL of an OpenAI-compatible endpoint.
    pub base_url: String,
    pub api_key: SecretString,
    pub model: String,
}

/// HTTP question generator.
pub struct HttpQuestionGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl HttpQuestionGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        tracing::info!(model = %config.model, "Question generator enabled");
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn prompt(tech: &str) -> String {
        format!(
            "Write one challenging technical interview question about {tech} \
             for a software developer position. Reply with only the question."
        )
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate(&self, tech: &str) -> Result<Option<String>, GenerateError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "user", "content": Self::prompt(tech) }
            ],
            "max_tokens": 120,
        });

        let response = self
            .client
            .post(format!(
                "{}/v1/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GenerateError::RequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string());

        Ok(text.filter(|t| !t.is_empty()))
    }
}

//! Translator implementations.

use async_trait::async_trait;
use serde::Deserialize;

use crate::collab::{language::CANONICAL_LANGUAGE, Translator};
use crate::error::TranslateError;

/// A translator that performs no translation. Every utterance is reported as
/// the canonical language and passed through unchanged. This is the default
/// when no translation service is configured.
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn detect_language(&self, _text: &str) -> Result<String, TranslateError> {
        Ok(CANONICAL_LANGUAGE.to_string())
    }

    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }
}

/// HTTP translator speaking the LibreTranslate wire format:
/// `POST /detect` with `{q}` and `POST /translate` with `{q, source, target}`.
pub struct HttpTranslator {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct DetectResponse {
    language: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpTranslator {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn payload(&self, mut body: serde_json::Value) -> serde_json::Value {
        if let (Some(key), Some(obj)) = (&self.api_key, body.as_object_mut()) {
            obj.insert("api_key".to_string(), serde_json::Value::from(key.clone()));
        }
        body
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn detect_language(&self, text: &str) -> Result<String, TranslateError> {
        let body = self.payload(serde_json::json!({ "q": text }));
        let response = self
            .client
            .post(format!("{}/detect", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslateError::RequestFailed(e.to_string()))?;

        let detections: Vec<DetectResponse> = response
            .json()
            .await
            .map_err(|e| TranslateError::InvalidResponse(e.to_string()))?;

        detections
            .into_iter()
            .next()
            .map(|d| d.language)
            .ok_or_else(|| TranslateError::InvalidResponse("empty detection list".to_string()))
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        // Identity translation is a no-op; never hit the network for it.
        if source == target {
            return Ok(text.to_string());
        }

        let body = self.payload(serde_json::json!({
            "q": text,
            "source": source,
            "target": target,
        }));
        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslateError::RequestFailed(e.to_string()))?;

        let translated: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::InvalidResponse(e.to_string()))?;

        Ok(translated.translated_text)
    }
}

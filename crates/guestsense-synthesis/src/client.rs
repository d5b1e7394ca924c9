//! Generative model clients

use crate::error::SynthesisError;
use async_trait::async_trait;
use guestsense_core::ServiceConfig;
use serde_json::{json, Value};

/// A generative model that answers a prompt with JSON conforming to `schema`
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Returns the raw JSON text produced by the model
    async fn generate_json(
        &self,
        model: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, SynthesisError>;
}

/// Gemini `generateContent` over REST
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SynthesisError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from configuration. `Ok(None)` when no credential is configured.
    pub fn from_config(config: &ServiceConfig) -> Result<Option<Self>, SynthesisError> {
        match &config.api_key {
            Some(key) => Self::new(key.clone(), config.gemini_base_url.clone()).map(Some),
            None => Ok(None),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate_json(
        &self,
        model: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, SynthesisError> {
        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request_body(prompt, schema))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::status(status.as_u16(), &body));
        }

        let body: Value = response.json().await?;
        extract_candidate_text(&body).ok_or(SynthesisError::EmptyResponse)
    }
}

/// Request payload asking for schema-constrained JSON output
pub fn build_request_body(prompt: &str, schema: &Value) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

/// Concatenated text parts of the first candidate, if any
pub fn extract_candidate_text(body: &Value) -> Option<String> {
    let parts = body.pointer("/candidates/0/content/parts")?.as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

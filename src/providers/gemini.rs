use log::debug;
use serde_json::{Value, json};

use crate::config::{ApiConfig, ApiKey};
use crate::errors::GenerateError;

use super::{ProviderHttpClient, TextGenerator};
use crate::types::ModelId;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiGenerator {
    http: ProviderHttpClient,
    key: Option<ApiKey>,
    model: ModelId,
}

impl GeminiGenerator {
    pub fn new(config: &ApiConfig) -> Result<Self, GenerateError> {
        let http = ProviderHttpClient::new(config.timeout_secs)?;

        Ok(Self {
            http,
            key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.validate_config()?;
        let key = self
            .key
            .as_ref()
            .ok_or_else(|| GenerateError::MissingApiKey("gemini".to_string()))?;

        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }],
            }],
        });

        // Key travels in a header, never in the URL, so logs stay clean.
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        debug!("POST {url}");

        let res = self
            .http
            .client()
            .post(&url)
            .header("x-goog-api-key", key.as_str())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await?;
            return Err(GenerateError::Api(format!(
                "Gemini API Error {status}: {err_text}"
            )));
        }

        let response_json: Value = res.json().await?;
        extract_text(&response_json)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &ModelId {
        &self.model
    }

    fn validate_config(&self) -> Result<(), GenerateError> {
        match &self.key {
            Some(key) if !key.as_str().is_empty() => Ok(()),
            _ => Err(GenerateError::MissingApiKey("gemini".to_string())),
        }
    }
}

/// Pull the completion text out of a `generateContent` response. Multiple
/// text parts are concatenated in order.
fn extract_text(response: &Value) -> Result<String, GenerateError> {
    let parts = response["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .ok_or_else(|| {
            GenerateError::InvalidResponse(
                "missing 'candidates[0].content.parts' array".to_string(),
            )
        })?;

    let mut text = String::new();
    for part in parts {
        if let Some(t) = part.get("text").and_then(|v| v.as_str()) {
            text.push_str(t);
        }
    }

    Ok(text)
}

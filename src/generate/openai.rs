//! OpenAI Responses API client

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::http::post_json;
use super::{require_key, GenerateError, Provider, TextGenerator};
use crate::domain::ProviderSettings;

pub const DEFAULT_MODEL: &str = "gpt-5-nano";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentItem>,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, settings: &ProviderSettings) -> Self {
        Self {
            api_key: api_key.into(),
            model: settings.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: settings.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(settings.timeout_secs.unwrap_or(super::DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/responses", self.base_url.trim_end_matches('/'))
    }
}

/// Concatenate every `output_text` item, skipping reasoning and tool output.
fn parse_response(body: &str) -> Result<String, GenerateError> {
    let provider = Provider::Gpt;
    let parsed: ResponsesResponse = serde_json::from_str(body)
        .map_err(|e| GenerateError::InvalidResponse { provider, reason: e.to_string() })?;

    let text: String = parsed
        .output
        .into_iter()
        .flat_map(|item| item.content)
        .filter(|c| c.kind == "output_text")
        .filter_map(|c| c.text)
        .collect();

    if text.is_empty() {
        return Err(GenerateError::EmptyResponse { provider });
    }
    Ok(text)
}

impl TextGenerator for OpenAiClient {
    fn provider(&self) -> Provider {
        Provider::Gpt
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let key = require_key(Provider::Gpt, &self.api_key)?;
        let request = ResponsesRequest { model: &self.model, input: prompt };
        let body = post_json(Provider::Gpt, &self.endpoint(), self.timeout, &request, |req| {
            req.bearer_auth(key)
        })?;
        parse_response(&body)
    }
}

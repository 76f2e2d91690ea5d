//! Google Gemini `generateContent` client

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::http::post_json;
use super::{require_key, GenerateError, Provider, TextGenerator};
use crate::domain::ProviderSettings;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
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
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn request_body(prompt: &str) -> GenerateContentRequest<'_> {
    GenerateContentRequest { contents: vec![Content { parts: vec![RequestPart { text: prompt }] }] }
}

/// Join the text parts of the first candidate.
fn parse_response(body: &str) -> Result<String, GenerateError> {
    let provider = Provider::Gemini;
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GenerateError::InvalidResponse { provider, reason: e.to_string() })?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GenerateError::EmptyResponse { provider });
    }
    Ok(text)
}

impl TextGenerator for GeminiClient {
    fn provider(&self) -> Provider {
        Provider::Gemini
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let key = require_key(Provider::Gemini, &self.api_key)?;
        let body = post_json(Provider::Gemini, &self.endpoint(), self.timeout, &request_body(prompt), |req| {
            req.header("x-goog-api-key", key)
        })?;
        parse_response(&body)
    }
}

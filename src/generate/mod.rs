//! Generative text providers (Gemini and OpenAI GPT)
//!
//! Each client takes the homeroom teacher's API key and a prompt and returns the
//! generated text. Calls are blocking; one request per invocation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bytes::estimate_str_bytes;
use crate::domain::ProviderSettings;

pub mod error;
pub mod gemini;
mod http;
pub mod openai;

pub use error::GenerateError;
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    #[value(alias = "openai")]
    Gpt,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Gemini => write!(f, "Gemini"),
            Provider::Gpt => write!(f, "GPT"),
        }
    }
}

pub trait TextGenerator {
    fn provider(&self) -> Provider;

    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Reject a blank key before any request is made.
fn require_key(provider: Provider, key: &str) -> Result<&str, GenerateError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(GenerateError::MissingApiKey { provider });
    }
    Ok(key)
}

pub fn build_generator(
    provider: Provider,
    settings: &ProviderSettings,
    api_key: &str,
) -> Box<dyn TextGenerator> {
    match provider {
        Provider::Gemini => Box::new(GeminiClient::new(api_key, settings)),
        Provider::Gpt => Box::new(OpenAiClient::new(api_key, settings)),
    }
}

/// Run `generator`, logging the outcome.
pub fn generate_text(generator: &dyn TextGenerator, prompt: &str) -> Result<String, GenerateError> {
    let provider = generator.provider();
    match generator.generate(prompt) {
        Ok(text) => {
            tracing::info!(
                "{} generated {} chars ({} NEIS bytes)",
                provider,
                text.chars().count(),
                estimate_str_bytes(&text)
            );
            Ok(text)
        }
        Err(e) => {
            tracing::error!("{} API error: {}", provider, e);
            Err(e)
        }
    }
}

/// Generate with Gemini using default settings.
pub fn generate_gemini(api_key: &str, prompt: &str) -> Result<String, GenerateError> {
    generate_text(&GeminiClient::new(api_key, &ProviderSettings::default()), prompt)
}

/// Generate with GPT using default settings.
pub fn generate_gpt(api_key: &str, prompt: &str) -> Result<String, GenerateError> {
    generate_text(&OpenAiClient::new(api_key, &ProviderSettings::default()), prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Result<&'static str, ()>);

    impl TextGenerator for Canned {
        fn provider(&self) -> Provider {
            Provider::Gemini
        }

        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            self.0
                .map(str::to_string)
                .map_err(|_| GenerateError::EmptyResponse { provider: Provider::Gemini })
        }
    }

    #[test]
    fn generate_text_passes_through() {
        assert_eq!(generate_text(&Canned(Ok("생성됨")), "p").expect("text"), "생성됨");
        assert!(generate_text(&Canned(Err(())), "p").is_err());
    }

    #[test]
    fn blank_keys_are_rejected() {
        assert!(matches!(
            generate_gemini("", "prompt"),
            Err(GenerateError::MissingApiKey { provider: Provider::Gemini })
        ));
        assert!(matches!(
            generate_gpt("   ", "prompt"),
            Err(GenerateError::MissingApiKey { provider: Provider::Gpt })
        ));
    }

    #[test]
    fn build_generator_picks_provider() {
        let settings = ProviderSettings::default();
        assert_eq!(build_generator(Provider::Gemini, &settings, "k").provider(), Provider::Gemini);
        assert_eq!(build_generator(Provider::Gpt, &settings, "k").provider(), Provider::Gpt);
    }

    #[test]
    fn provider_names() {
        assert_eq!(Provider::Gemini.to_string(), "Gemini");
        assert_eq!(Provider::Gpt.to_string(), "GPT");
        let err = GenerateError::MissingApiKey { provider: Provider::Gpt };
        assert_eq!(err.provider(), Provider::Gpt);
    }
}

//! Provider error type

use thiserror::Error;

use super::Provider;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{provider} API key is missing; register one in the config file or environment")]
    MissingApiKey { provider: Provider },

    #[error("failed to reach {provider}: {source}")]
    Request {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP {status}: {body}")]
    Status { provider: Provider, status: u16, body: String },

    #[error("{provider} response could not be parsed: {reason}")]
    InvalidResponse { provider: Provider, reason: String },

    #[error("{provider} returned no text")]
    EmptyResponse { provider: Provider },
}

impl GenerateError {
    pub fn provider(&self) -> Provider {
        match self {
            GenerateError::MissingApiKey { provider }
            | GenerateError::Request { provider, .. }
            | GenerateError::Status { provider, .. }
            | GenerateError::InvalidResponse { provider, .. }
            | GenerateError::EmptyResponse { provider } => *provider,
        }
    }
}

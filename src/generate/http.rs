//! Blocking JSON POST shared by both providers.

use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use std::time::Duration;

use super::{GenerateError, Provider};

/// Longest error body echoed back in a [`GenerateError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 300;

/// POST `body` as JSON and return the raw response text on success.
///
/// `authorize` attaches the provider's credentials to the request.
pub(crate) fn post_json<B, F>(
    provider: Provider,
    url: &str,
    timeout: Duration,
    body: &B,
    authorize: F,
) -> Result<String, GenerateError>
where
    B: Serialize + ?Sized,
    F: FnOnce(RequestBuilder) -> RequestBuilder,
{
    let request_err = |source: reqwest::Error| GenerateError::Request { provider, source };

    let client = Client::builder().timeout(timeout).build().map_err(request_err)?;

    tracing::debug!("{}: POST {}", provider, url);
    let response = authorize(client.post(url).json(body)).send().map_err(request_err)?;

    let status = response.status();
    let text = response.text().map_err(request_err)?;
    if !status.is_success() {
        return Err(GenerateError::Status {
            provider,
            status: status.as_u16(),
            body: truncate_chars(&text, MAX_ERROR_BODY_CHARS),
        });
    }
    Ok(text)
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("한글입니다", 2), "한글...");
    }
}

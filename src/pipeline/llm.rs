//! Translator interaction: one chat-completion call per extracted chunk.
//!
//! This module is intentionally thin — the instruction text lives in
//! [`crate::prompts`] so it can be revised without touching transport or
//! error-classification logic here.
//!
//! The client is stateless across invocations: every chunk goes out as a
//! fresh single-message conversation, and nothing is retained between calls.
//! There is no retry, no streaming, and no chunking of oversized inputs; a
//! chunk that exceeds the model's context window fails with a model-kind
//! error for that range only.

use crate::config::TranslationConfig;
use crate::error::{TarjemError, TranslationError, TranslationErrorKind};
use crate::prompts::translation_request;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use zeroize::Zeroize;

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

// ── Client ───────────────────────────────────────────────────────────────

/// Chat-completion client for a single upload.
///
/// Holds the per-request credential and model; constructed once per upload
/// by the orchestrator and dropped with it, so the credential never outlives
/// the request.
pub struct TranslatorClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl Drop for TranslatorClient {
    fn drop(&mut self) {
        self.api_key.zeroize();
    }
}

impl TranslatorClient {
    pub fn new(config: &TranslationConfig) -> Result<Self, TarjemError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(|e| TarjemError::Internal(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Translate one extracted chunk.
    ///
    /// Sends the fixed instruction plus the source text as a single user
    /// message and returns the first choice's content, trimmed.
    pub async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let content = translation_request(text);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &content,
            }],
        };

        debug!(model = %self.model, chars = text.len(), "Submitting chunk to translator");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Translator returned an error");
            return Err(classify_status(status, &body));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            TranslationError::new(
                TranslationErrorKind::Transport,
                format!("Malformed translator response: {e}"),
            )
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                TranslationError::new(
                    TranslationErrorKind::Model,
                    "Translator response contained no choices",
                )
            })?;

        Ok(content.trim().to_string())
    }
}

/// Map a reqwest transport failure onto the error taxonomy.
fn classify_send_error(e: reqwest::Error) -> TranslationError {
    let kind = if e.is_timeout() || e.is_connect() || e.is_request() {
        TranslationErrorKind::Transport
    } else {
        TranslationErrorKind::Other
    };
    TranslationError::new(kind, e.to_string())
}

/// Map a non-2xx translator status onto the error taxonomy.
///
/// The response body is preserved verbatim in the message — it carries the
/// service's own explanation (invalid key, unknown model, context overflow),
/// which is exactly what a log reader needs.
fn classify_status(status: StatusCode, body: &str) -> TranslationError {
    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TranslationErrorKind::Auth,
        StatusCode::TOO_MANY_REQUESTS => TranslationErrorKind::RateLimit,
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::PAYLOAD_TOO_LARGE => {
            TranslationErrorKind::Model
        }
        _ => TranslationErrorKind::Other,
    };
    TranslationError::new(kind, format!("HTTP {status}: {body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslationConfig;

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        let config = TranslationConfig::builder("sk-test")
            .api_base("http://localhost:9/v1/")
            .build()
            .unwrap();
        let client = TranslatorClient::new(&config).unwrap();
        assert_eq!(client.endpoint, "http://localhost:9/v1/chat/completions");
    }

    #[test]
    fn status_classification() {
        use TranslationErrorKind::*;
        let cases = [
            (StatusCode::UNAUTHORIZED, Auth),
            (StatusCode::FORBIDDEN, Auth),
            (StatusCode::TOO_MANY_REQUESTS, RateLimit),
            (StatusCode::BAD_REQUEST, Model),
            (StatusCode::NOT_FOUND, Model),
            (StatusCode::INTERNAL_SERVER_ERROR, Other),
        ];
        for (status, expected) in cases {
            assert_eq!(classify_status(status, "").kind, expected, "{status}");
        }
    }

    #[test]
    fn status_message_preserves_body() {
        let e = classify_status(StatusCode::UNAUTHORIZED, "Incorrect API key provided");
        assert!(e.message.contains("Incorrect API key provided"));
        assert!(e.message.contains("401"));
    }

    #[test]
    fn request_body_shape() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }
}

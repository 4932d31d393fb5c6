use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::{ChatReply, ChatRequest, ChatResponse};
use crate::utils::url::construct_api_url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// All failure modes of a chat request. The chat loop treats every variant
/// uniformly as a connectivity failure; the distinction only matters for
/// logging.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, TLS, timeout, body decode).
    Transport(reqwest::Error),
    /// The backend answered with a non-success status.
    Status(reqwest::StatusCode),
    /// The response decoded but carried no usable reply text.
    EmptyReply,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(source) => write!(f, "request failed: {source}"),
            ApiError::Status(status) => write!(f, "backend returned {status}"),
            ApiError::EmptyReply => write!(f, "backend response carried no reply text"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(source) => Some(source),
            _ => None,
        }
    }
}

/// Client for the conversational-response service. One instance is shared
/// for the whole session; at most one request is in flight at a time because
/// the submit path is disabled while a request is pending.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send the latest user message and return the assistant's reply.
    pub async fn send_message(&self, message: &str) -> Result<ChatReply, ApiError> {
        let url = construct_api_url(&self.base_url, "chat");
        debug!(%url, "sending chat request");

        let response = self
            .http
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, error = %summarize_error_body(&body), "chat request failed");
            return Err(ApiError::Status(status));
        }

        let payload: ChatResponse = response.json().await.map_err(ApiError::Transport)?;
        match payload.response {
            Some(text) if !text.trim().is_empty() => Ok(ChatReply {
                text,
                suggestions: payload.suggestions,
            }),
            _ => Err(ApiError::EmptyReply),
        }
    }
}

/// Reduce an error body to a single log-friendly line. JSON bodies are
/// probed for the conventional message fields; anything else is collapsed
/// whitespace.
fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        let summary = value
            .pointer("/error/message")
            .or_else(|| value.pointer("/detail"))
            .or_else(|| value.pointer("/message"))
            .and_then(|v| v.as_str());
        if let Some(summary) = summary {
            return summary.split_whitespace().collect::<Vec<_>>().join(" ");
        }
    }

    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

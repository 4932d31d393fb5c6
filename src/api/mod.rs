use serde::{Deserialize, Serialize};

pub mod client;

pub use client::{ApiError, ChatClient};

/// Request body for `POST /chat`: the latest user message only. The backend
/// owns whatever conversational context it keeps.
#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response body for `POST /chat`. `response` is nominally required but the
/// shape is not guaranteed, so it is decoded leniently and validated by the
/// client.
#[derive(Deserialize)]
pub struct ChatResponse {
    pub response: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// A validated assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_decodes_with_suggestions() {
        let payload: ChatResponse =
            serde_json::from_str(r#"{"response": "hi", "suggestions": ["more?"]}"#)
                .expect("valid payload");
        assert_eq!(payload.response.as_deref(), Some("hi"));
        assert_eq!(payload.suggestions, vec!["more?".to_string()]);
    }

    #[test]
    fn suggestions_default_to_empty() {
        let payload: ChatResponse =
            serde_json::from_str(r#"{"response": "hi"}"#).expect("valid payload");
        assert!(payload.suggestions.is_empty());
    }

    #[test]
    fn missing_response_field_decodes_as_none() {
        let payload: ChatResponse =
            serde_json::from_str(r#"{"suggestions": []}"#).expect("lenient decode");
        assert!(payload.response.is_none());
    }

    #[test]
    fn request_serializes_message_only() {
        let body = serde_json::to_string(&ChatRequest { message: "hello" }).expect("serialize");
        assert_eq!(body, r#"{"message":"hello"}"#);
    }
}

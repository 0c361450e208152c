//! Request payloads and errors for the LLM backends

use serde::Serialize;
use thiserror::Error;
use workdeck_domain::WorkdeckError;

/// Errors returned by [`super::LlmClient`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Endpoint answered with a non-success status
    #[error("HTTP error! Status: {status}")]
    Transport { status: u16, message: String },

    /// Connection failure, timeout, or a broken response body
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<LlmError> for WorkdeckError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Transport { status, message } => WorkdeckError::Transport { status, message },
            LlmError::Network(msg) => WorkdeckError::Network(msg),
            LlmError::InvalidInput(msg) => WorkdeckError::InvalidInput(msg),
        }
    }
}

impl From<WorkdeckError> for LlmError {
    fn from(err: WorkdeckError) -> Self {
        match err {
            WorkdeckError::Transport { status, message } => LlmError::Transport { status, message },
            WorkdeckError::InvalidInput(msg) => LlmError::InvalidInput(msg),
            WorkdeckError::Network(msg) => LlmError::Network(msg),
            other => LlmError::Network(other.to_string()),
        }
    }
}

/// OpenAI-compatible chat completions body
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub stream: bool,
    pub messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// Ollama `/api/generate` body
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn chat_request_shape() {
        let body = ChatCompletionRequest {
            model: "m",
            stream: true,
            messages: [
                ChatMessage { role: "system", content: "sys" },
                ChatMessage { role: "user", content: "hi" },
            ],
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "model": "m",
                "stream": true,
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "hi" }
                ]
            })
        );
    }

    #[test]
    fn transport_error_keeps_status() {
        let err: WorkdeckError = LlmError::Transport { status: 401, message: String::new() }.into();
        assert_eq!(err.to_string(), "HTTP error! Status: 401");
    }
}

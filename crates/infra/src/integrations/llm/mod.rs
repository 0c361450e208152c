/// Streaming LLM backends used to draft pull-request descriptions
///
/// Two wire protocols are supported:
///
/// - **OpenAI-compatible** chat completions (Tabby and friends): the request
///   carries a system and a user message with `stream: true`, and the answer
///   arrives as `data: <json>` SSE lines terminated by `data: [DONE]`.
/// - **Ollama** `/api/generate`: the request carries a bare prompt, and the
///   answer arrives as newline-delimited JSON objects with a `response` field.
///
/// Both feed the raw byte stream into the core accumulator, so partial lines
/// and split UTF-8 sequences are handled identically.
///
/// # Usage
///
/// ```no_run
/// use workdeck_domain::ChatConfig;
/// use workdeck_infra::integrations::llm::{LlmClient, LlmProvider};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LlmClient::from_config(LlmProvider::Ollama, &ChatConfig::default())?;
/// let text = client.complete("Summarize: fix login redirect").await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
///
/// # Error Handling
///
/// - **Non-2xx status**: `LlmError::Transport` with the status code
/// - **Connection or mid-stream read failure**: `LlmError::Network`
/// - **Malformed stream lines**: skipped and logged, never an error
pub mod client;
pub mod types;

pub use client::{LlmClient, LlmProvider};
pub use types::LlmError;

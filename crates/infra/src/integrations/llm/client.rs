/// Streaming chat client for OpenAI-compatible and Ollama endpoints
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use tracing::{debug, info};
use workdeck_core::{accumulate, ChatBackend};
use workdeck_domain::constants::PR_SYSTEM_PROMPT;
use workdeck_domain::{ChatConfig, Framing, Result as DomainResult};

use super::types::{ChatCompletionRequest, ChatMessage, GenerateRequest, LlmError};
use crate::http::HttpClient;

/// Wire protocol spoken by a chat endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// OpenAI-compatible chat completions (e.g. Tabby), streamed as SSE
    OpenAiCompatible,
    /// Ollama `/api/generate`, answered as NDJSON
    Ollama,
}

impl LlmProvider {
    pub const fn framing(self) -> Framing {
        match self {
            Self::OpenAiCompatible => Framing::Sse,
            Self::Ollama => Framing::Ndjson,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenAiCompatible => "tabby",
            Self::Ollama => "ollama",
        }
    }
}

/// Chat client bound to one endpoint
#[derive(Debug, Clone)]
pub struct LlmClient {
    http_client: HttpClient,
    provider: LlmProvider,
    url: String,
    model: String,
    auth_token: Option<String>,
    stream: bool,
}

impl LlmClient {
    /// Build a client for `provider` from the chat section of the config.
    ///
    /// The configured timeout bounds each read of the streamed answer, not
    /// the whole generation.
    pub fn from_config(provider: LlmProvider, config: &ChatConfig) -> Result<Self, LlmError> {
        let http_client =
            HttpClient::builder().read_timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self::with_http_client(provider, config, http_client))
    }

    pub fn with_http_client(
        provider: LlmProvider,
        config: &ChatConfig,
        http_client: HttpClient,
    ) -> Self {
        let (url, model, stream) = match provider {
            LlmProvider::OpenAiCompatible => (&config.tabby_url, &config.tabby_model, true),
            LlmProvider::Ollama => (&config.ollama_url, &config.ollama_model, config.ollama_stream),
        };

        Self {
            http_client,
            provider,
            url: url.clone(),
            model: model.clone(),
            auth_token: match provider {
                LlmProvider::OpenAiCompatible => config.auth_token.clone(),
                LlmProvider::Ollama => None,
            },
            stream,
        }
    }

    /// Send `prompt` and accumulate the streamed answer.
    ///
    /// # Errors
    /// `Transport` on a non-success status, `Network` when the endpoint is
    /// unreachable or the body breaks off.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if prompt.trim().is_empty() {
            return Err(LlmError::InvalidInput("prompt must not be empty".into()));
        }

        info!(provider = self.provider.label(), model = %self.model, "requesting completion");

        let response = self.http_client.send(self.build_request(prompt)).await?;
        let status = response.status();
        debug!(provider = self.provider.label(), status = status.as_u16(), "completion response");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Transport { status: status.as_u16(), message });
        }

        let text = accumulate(response.bytes_stream(), self.provider.framing()).await?;
        info!(provider = self.provider.label(), chars = text.chars().count(), "completion finished");
        Ok(text)
    }

    fn build_request(&self, prompt: &str) -> RequestBuilder {
        let builder = self.http_client.request(Method::POST, &self.url);

        match self.provider {
            LlmProvider::OpenAiCompatible => {
                let builder = match &self.auth_token {
                    Some(token) => builder.bearer_auth(token),
                    None => builder,
                };
                builder.json(&ChatCompletionRequest {
                    model: &self.model,
                    stream: true,
                    messages: [
                        ChatMessage { role: "system", content: PR_SYSTEM_PROMPT },
                        ChatMessage { role: "user", content: prompt },
                    ],
                })
            }
            LlmProvider::Ollama => builder.json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: self.stream,
            }),
        }
    }
}

#[async_trait]
impl ChatBackend for LlmClient {
    fn name(&self) -> &str {
        self.provider.label()
    }

    fn framing(&self) -> Framing {
        self.provider.framing()
    }

    async fn complete(&self, prompt: &str) -> DomainResult<String> {
        LlmClient::complete(self, prompt).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> ChatConfig {
        ChatConfig {
            tabby_url: format!("{}/v1/chat/completions", server.uri()),
            tabby_model: "tiny".into(),
            ollama_url: format!("{}/api/generate", server.uri()),
            ollama_model: "qwen".into(),
            timeout_secs: 5,
            ..ChatConfig::default()
        }
    }

    #[tokio::test]
    async fn accumulates_sse_deltas() {
        let server = MockServer::start().await;
        let body = concat!(
            "data: {\"choices\":[{\"delta\":{\"content\":\"## Summary\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"\\n- fix\"}}]}\n\n",
            "data: [DONE]\n\n",
        );
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_json(json!({
                "model": "tiny",
                "stream": true,
                "messages": [
                    { "role": "system", "content": PR_SYSTEM_PROMPT },
                    { "role": "user", "content": "draft it" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::from_config(LlmProvider::OpenAiCompatible, &config_for(&server))
            .expect("client");
        assert_eq!(client.complete("draft it").await.unwrap(), "## Summary\n- fix");
    }

    #[tokio::test]
    async fn accumulates_ndjson_objects() {
        let server = MockServer::start().await;
        let body = "{\"response\":\"Hel\",\"done\":false}\n{\"response\":\"lo\",\"done\":false}\n{\"response\":\"\",\"done\":true}\n";
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_json(json!({ "model": "qwen", "prompt": "hi", "stream": false })))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/x-ndjson"))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            LlmClient::from_config(LlmProvider::Ollama, &config_for(&server)).expect("client");
        assert_eq!(client.complete("hi").await.unwrap(), "Hello");
    }

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            LlmClient::from_config(LlmProvider::Ollama, &config_for(&server)).expect("client");
        let err = client.complete("hi").await.unwrap_err();

        assert_eq!(err, LlmError::Transport { status: 500, message: "model not loaded".into() });
        assert_eq!(err.to_string(), "HTTP error! Status: 500");
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer auth_0123"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("data: [DONE]\n", "text/event-stream"))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.auth_token = Some("auth_0123".into());
        let client =
            LlmClient::from_config(LlmProvider::OpenAiCompatible, &config).expect("client");

        assert_eq!(client.complete("hi").await.unwrap(), "");
    }

    #[tokio::test]
    async fn omits_authorization_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("data: [DONE]\n", "text/event-stream"))
            .mount(&server)
            .await;

        let client = LlmClient::from_config(LlmProvider::OpenAiCompatible, &config_for(&server))
            .expect("client");
        client.complete("hi").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn ollama_never_sends_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"response\":\"ok\"}\n"))
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.auth_token = Some("auth_0123".into());
        let client = LlmClient::from_config(LlmProvider::Ollama, &config).expect("client");
        client.complete("hi").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ChatConfig {
            ollama_url: format!("http://{addr}/api/generate"),
            timeout_secs: 2,
            ..ChatConfig::default()
        };
        let client = LlmClient::from_config(LlmProvider::Ollama, &config).expect("client");

        assert!(matches!(client.complete("hi").await, Err(LlmError::Network(_))));
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_before_sending() {
        let server = MockServer::start().await;
        let client =
            LlmClient::from_config(LlmProvider::Ollama, &config_for(&server)).expect("client");

        assert!(matches!(client.complete("  ").await, Err(LlmError::InvalidInput(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;
use workdeck_domain::WorkdeckError;

use crate::errors::InfraError;

const DEFAULT_USER_AGENT: &str = concat!("workdeck/", env!("CARGO_PKG_VERSION"));

/// Thin HTTP transport for chat backends and the proxy.
///
/// One attempt per request. Timeouts bound connecting and each individual
/// body read, never the whole exchange, so long streamed generations are
/// not cut off while data keeps arriving.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, WorkdeckError> {
        Self::builder().build()
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request once.
    ///
    /// Non-success statuses are returned as responses; callers decide how to
    /// surface them.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, WorkdeckError> {
        let request = builder.build().map_err(|err| WorkdeckError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    connect_timeout: Duration,
    read_timeout: Duration,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientBuilder {
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Longest wait for the response head or for any single body read.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient, WorkdeckError> {
        // Local LLM endpoints must never be routed through a system proxy.
        let client = ReqwestClient::builder()
            .connect_timeout(self.connect_timeout)
            .read_timeout(self.read_timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(|err| WorkdeckError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}

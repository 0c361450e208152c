//! Local CORS proxy in front of an Ollama server
//!
//! Browser front-ends cannot call Ollama directly because it answers without
//! CORS headers. The proxy accepts `POST /api/generate`, forwards the body
//! to the configured upstream and relays status and body unchanged.

mod cors;
mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::Router;
use tracing::info;
use workdeck_domain::{ProxyConfig, Result, WorkdeckError};

use crate::http::HttpClient;

pub use cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};

/// Longest the proxy waits on any single read from the upstream.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(300);

/// Shared state handed to every proxy request
#[derive(Debug, Clone)]
pub struct ProxyState {
    http_client: HttpClient,
    upstream_url: Arc<str>,
}

impl ProxyState {
    pub fn new(http_client: HttpClient, upstream_url: impl Into<Arc<str>>) -> Self {
        Self { http_client, upstream_url: upstream_url.into() }
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }
}

/// Build the proxy router for `config`.
pub fn router(config: &ProxyConfig) -> Result<Router> {
    let http_client = HttpClient::builder().read_timeout(UPSTREAM_TIMEOUT).build()?;
    Ok(router_with_state(ProxyState::new(http_client, config.upstream_url.as_str())))
}

pub fn router_with_state(state: ProxyState) -> Router {
    routes::router().with_state(state).layer(middleware::from_fn(cors::cors_headers))
}

/// Bind `config.listen_addr` and serve until Ctrl-C.
pub async fn serve(config: &ProxyConfig) -> Result<()> {
    let app = router(config)?;

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await.map_err(|e| {
        WorkdeckError::Config(format!("cannot listen on {}: {e}", config.listen_addr))
    })?;

    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, upstream = %config.upstream_url, "proxy listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

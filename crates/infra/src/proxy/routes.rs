//! Proxy endpoints

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use reqwest::Method;
use serde::Serialize;
use tracing::{info, warn};
use workdeck_domain::WorkdeckError;

use super::ProxyState;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub(super) fn router() -> Router<ProxyState> {
    Router::new().route("/api/generate", post(generate))
}

/// POST /api/generate - forward the body upstream and relay the answer
async fn generate(State(state): State<ProxyState>, body: Bytes) -> Response {
    match forward(&state, body).await {
        Ok(response) => response,
        Err(err) => {
            warn!(upstream = state.upstream_url(), error = %err, "upstream request failed");
            let body = Json(ErrorResponse { error: err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
        }
    }
}

async fn forward(state: &ProxyState, body: Bytes) -> Result<Response, WorkdeckError> {
    let request = state
        .http_client
        .request(Method::POST, state.upstream_url())
        .header(CONTENT_TYPE, "application/json")
        .body(body);

    let upstream = state.http_client.send(request).await?;
    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    let text = upstream
        .text()
        .await
        .map_err(|e| WorkdeckError::Network(format!("failed to read upstream body: {e}")))?;

    info!(status = status.as_u16(), bytes = text.len(), "relayed upstream response");
    Ok((status, [(CONTENT_TYPE, content_type)], text).into_response())
}

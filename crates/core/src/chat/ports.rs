//! Chat backend port

use async_trait::async_trait;
use workdeck_domain::{Framing, Result};

/// A chat-completion endpoint that answers a prompt with concatenated text.
///
/// Implementations own their transport and endpoint configuration; a
/// non-success HTTP status must surface as `WorkdeckError::Transport`.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Framing of the backend's response body.
    fn framing(&self) -> Framing;

    /// Send `prompt` and return the fully accumulated response.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

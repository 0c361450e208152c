//! Chat service - prompt validation and backend dispatch

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use workdeck_domain::{Result, WorkdeckError};

use super::ports::ChatBackend;

/// Drafts text through a configured chat backend
pub struct ChatService {
    backend: Arc<dyn ChatBackend>,
}

impl ChatService {
    /// Create a new chat service
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Send a prompt and return the full response text.
    ///
    /// Blank prompts are rejected before any request is made.
    pub async fn draft(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(WorkdeckError::InvalidInput("Please enter a prompt.".to_string()));
        }

        let backend = self.backend.name();
        let started = Instant::now();
        info!(backend, framing = ?self.backend.framing(), "requesting chat completion");

        match self.backend.complete(prompt).await {
            Ok(text) => {
                info!(
                    backend,
                    chars = text.len(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "chat completion finished"
                );
                Ok(text)
            }
            Err(err) => {
                warn!(backend, error = %err, kind = err.label(), "chat completion failed");
                Err(err)
            }
        }
    }
}

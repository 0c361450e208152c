//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Workdeck
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum WorkdeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    /// The remote endpoint answered with a non-success status.
    #[error("HTTP error! Status: {status}")]
    Transport { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WorkdeckError {
    /// Stable label suitable for structured logging.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Transport { .. } => "transport",
            Self::InvalidInput(_) => "invalid_input",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<std::io::Error> for WorkdeckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Workdeck operations
pub type Result<T> = std::result::Result<T, WorkdeckError>;

//! # Workdeck Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with connect and read timeouts
//! - Streaming LLM clients (OpenAI-compatible SSE and Ollama NDJSON)
//! - Configuration loading from environment and files
//! - The local Ollama CORS proxy
//!
//! ## Architecture
//! - Implements traits defined in `workdeck-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod proxy;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::llm::{LlmClient, LlmError, LlmProvider};
pub use proxy::{router as proxy_router, serve as serve_proxy};

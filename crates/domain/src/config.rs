//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CHAT_TIMEOUT_SECS, DEFAULT_LOG_LEVEL, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL,
    DEFAULT_PROXY_LISTEN_ADDR, DEFAULT_PROXY_UPSTREAM_URL, DEFAULT_TABBY_MODEL, DEFAULT_TABBY_URL,
    DEFAULT_WORK_ITEM_BASE_URL,
};

/// Application configuration
///
/// Passed explicitly to every pipeline invocation; nothing reads endpoints or
/// tokens from module-level state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chat: ChatConfig,
    pub calendar: CalendarConfig,
    pub proxy: ProxyConfig,
    pub log_level: String,
}

/// LLM endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// OpenAI-compatible chat completions endpoint (SSE framing)
    pub tabby_url: String,
    pub tabby_model: String,
    /// Bearer token sent to the OpenAI-compatible endpoint when set
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
    /// Ollama generate endpoint (NDJSON framing)
    pub ollama_url: String,
    pub ollama_model: String,
    pub ollama_stream: bool,
    pub timeout_secs: u64,
}

/// Work-item calendar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Base URL that a work-item ID is appended to for deep links
    pub work_item_base_url: String,
}

/// Local Ollama CORS proxy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub listen_addr: String,
    pub upstream_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            calendar: CalendarConfig::default(),
            proxy: ProxyConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            tabby_url: DEFAULT_TABBY_URL.to_string(),
            tabby_model: DEFAULT_TABBY_MODEL.to_string(),
            auth_token: None,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            ollama_stream: false,
            timeout_secs: DEFAULT_CHAT_TIMEOUT_SECS,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { work_item_base_url: DEFAULT_WORK_ITEM_BASE_URL.to_string() }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_PROXY_LISTEN_ADDR.to_string(),
            upstream_url: DEFAULT_PROXY_UPSTREAM_URL.to_string(),
        }
    }
}

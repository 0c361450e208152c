//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Work-item CSV columns
pub const COLUMN_ID: &str = "ID";
pub const COLUMN_WORK_ITEM_TYPE: &str = "Work Item Type";
pub const COLUMN_TITLE: &str = "Title";
pub const COLUMN_ASSIGNED_TO: &str = "Assigned To";
pub const COLUMN_STATE: &str = "State";
pub const COLUMN_TAGS: &str = "Tags";
pub const COLUMN_START_DATE: &str = "Start Date";
pub const COLUMN_TARGET_DATE: &str = "Target Date";

// Calendar mapping
pub const UNASSIGNED: &str = "Unassigned";
pub const TICKET_NOTE_TITLE: &str = "Ticket";

// Streaming frames
pub const SSE_DATA_PREFIX: &str = "data: ";
pub const SSE_DONE_MARKER: &str = "[DONE]";

// Chat defaults
pub const DEFAULT_TABBY_URL: &str = "http://localhost:8080/v1/chat/completions";
pub const DEFAULT_TABBY_MODEL: &str = "Qwen2-1.5B-Instruct";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:4000/api/generate";
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen2.5-coder:14b-instruct-q4_0";
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 120;
pub const PR_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that writes PR descriptions in markdown.";

// Proxy defaults
pub const DEFAULT_PROXY_LISTEN_ADDR: &str = "127.0.0.1:4000";
pub const DEFAULT_PROXY_UPSTREAM_URL: &str = "http://localhost:11434/api/generate";

// Work-item deep links
pub const DEFAULT_WORK_ITEM_BASE_URL: &str =
    "https://dev.azure.com/PepsiCoIT2/CGF_PepsiCocom_Redesign/_workitems/edit";

pub const DEFAULT_LOG_LEVEL: &str = "info";

//! Chat streaming types

use serde::{Deserialize, Serialize};

/// Line framing used by a streaming chat backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// `data: <json>` lines terminated by `data: [DONE]`
    Sse,
    /// One JSON object per line
    Ndjson,
}

/// A single decoded line of a chat stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamFrame {
    /// Text carried by `choices[0].delta.content`
    SseDelta(String),
    /// The `[DONE]` sentinel
    SseDone,
    /// Text carried by an NDJSON object's `response` field
    NdjsonChunk(String),
    /// Anything else: foreign lines, malformed JSON, frames without text
    Unrecognized,
}

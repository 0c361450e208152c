//! Per-provider line decoders

use serde_json::Value;
use tracing::{debug, warn};
use workdeck_domain::constants::{SSE_DATA_PREFIX, SSE_DONE_MARKER};
use workdeck_domain::{Framing, StreamFrame};

/// Turns one complete line (without its `\n`) into a frame.
pub type FrameDecoder = fn(&str) -> StreamFrame;

/// Built-in decoder for a framing mode.
pub fn decoder_for(framing: Framing) -> FrameDecoder {
    match framing {
        Framing::Sse => decode_sse_line,
        Framing::Ndjson => decode_ndjson_line,
    }
}

/// OpenAI-style `data: {...}` lines.
///
/// Lines without the `data: ` prefix, malformed JSON and payloads without
/// `choices[0].delta.content` text all decode to `Unrecognized`.
pub fn decode_sse_line(line: &str) -> StreamFrame {
    let Some(payload) = line.strip_prefix(SSE_DATA_PREFIX) else {
        return StreamFrame::Unrecognized;
    };

    if payload.trim() == SSE_DONE_MARKER {
        return StreamFrame::SseDone;
    }

    match serde_json::from_str::<Value>(payload) {
        Ok(value) => value
            .pointer("/choices/0/delta/content")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map_or(StreamFrame::Unrecognized, |text| StreamFrame::SseDelta(text.to_string())),
        Err(err) => {
            debug!(error = %err, "skipping malformed SSE payload");
            StreamFrame::Unrecognized
        }
    }
}

/// Ollama-style newline-delimited JSON carrying a `response` field.
pub fn decode_ndjson_line(line: &str) -> StreamFrame {
    if line.trim().is_empty() {
        return StreamFrame::Unrecognized;
    }

    match serde_json::from_str::<Value>(line) {
        Ok(value) => value
            .get("response")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map_or(StreamFrame::Unrecognized, |text| StreamFrame::NdjsonChunk(text.to_string())),
        Err(err) => {
            warn!(error = %err, line, "failed to parse NDJSON line");
            StreamFrame::Unrecognized
        }
    }
}

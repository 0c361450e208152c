//! Chat response accumulator

use std::fmt::Display;

use futures::{Stream, StreamExt};
use tracing::debug;
use workdeck_domain::{Framing, Result, StreamFrame, WorkdeckError};

use super::frames::{decoder_for, FrameDecoder};

/// Incremental state for one streamed chat response.
///
/// Bytes are decoded as UTF-8 with incomplete code points carried to the
/// next chunk, split into lines with the trailing fragment held back, and
/// each complete line is decoded into a frame. Output is append-only and
/// independent of how the body was fragmented.
#[derive(Debug)]
pub struct ChatAccumulator {
    decoder: FrameDecoder,
    pending: Vec<u8>,
    buffer: String,
    result: String,
    finished: bool,
}

impl ChatAccumulator {
    pub fn new(framing: Framing) -> Self {
        Self::with_decoder(decoder_for(framing))
    }

    pub fn with_decoder(decoder: FrameDecoder) -> Self {
        Self {
            decoder,
            pending: Vec::new(),
            buffer: String::new(),
            result: String::new(),
            finished: false,
        }
    }

    /// Feed the next body chunk.
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        // The held-back fragment never contains a newline, so only the newly
        // decoded text needs scanning.
        let scan_from = self.buffer.len();
        self.decode_utf8(chunk);

        let Some(last_newline) = self.buffer[scan_from..].rfind('\n').map(|at| scan_from + at)
        else {
            return;
        };
        let complete: String = self.buffer.drain(..=last_newline).collect();
        for line in complete[..last_newline].split('\n') {
            self.process_line(line);
        }
    }

    /// Text accumulated so far.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Whether a `[DONE]` sentinel has been seen.
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// End of stream: process any unterminated last line and return the text.
    ///
    /// An incomplete UTF-8 sequence left at the end is dropped.
    pub fn finish(mut self) -> String {
        let tail = std::mem::take(&mut self.buffer);
        if !tail.is_empty() {
            self.process_line(&tail);
        }
        self.result
    }

    fn process_line(&mut self, line: &str) {
        if self.finished {
            return;
        }

        match (self.decoder)(line) {
            StreamFrame::SseDelta(text) | StreamFrame::NdjsonChunk(text) => {
                self.result.push_str(&text);
            }
            StreamFrame::SseDone => self.finished = true,
            StreamFrame::Unrecognized => {}
        }
    }

    fn decode_utf8(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);

        let mut consumed = 0;
        while consumed < self.pending.len() {
            match std::str::from_utf8(&self.pending[consumed..]) {
                Ok(text) => {
                    self.buffer.push_str(text);
                    consumed = self.pending.len();
                }
                Err(err) => {
                    let valid_end = consumed + err.valid_up_to();
                    if let Ok(text) = std::str::from_utf8(&self.pending[consumed..valid_end]) {
                        self.buffer.push_str(text);
                    }
                    match err.error_len() {
                        // Invalid sequence in the middle of the data
                        Some(len) => {
                            self.buffer.push(char::REPLACEMENT_CHARACTER);
                            consumed = valid_end + len;
                        }
                        // Incomplete code point at the end, wait for more bytes
                        None => {
                            consumed = valid_end;
                            break;
                        }
                    }
                }
            }
        }

        self.pending.drain(..consumed);
    }
}

/// Drain a byte stream through a [`ChatAccumulator`] using the built-in
/// decoder for `framing`.
pub async fn accumulate<S, B, E>(stream: S, framing: Framing) -> Result<String>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    accumulate_with_decoder(stream, decoder_for(framing)).await
}

/// Drain a byte stream through a [`ChatAccumulator`] with a custom decoder.
///
/// The whole stream is read even after a `[DONE]` sentinel. A failed chunk
/// read is a transport failure and aborts with `WorkdeckError::Network`.
pub async fn accumulate_with_decoder<S, B, E>(stream: S, decoder: FrameDecoder) -> Result<String>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut accumulator = ChatAccumulator::with_decoder(decoder);
    let mut chunks: usize = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| {
            WorkdeckError::Network(format!("failed to read response body: {err}"))
        })?;
        chunks += 1;
        accumulator.push_chunk(chunk.as_ref());
    }

    let saw_terminator = accumulator.is_finished();
    let result = accumulator.finish();
    debug!(chunks, bytes = result.len(), saw_terminator, "chat stream drained");

    Ok(result)
}

//! Streaming chat response handling
//!
//! Chat backends answer with a chunked body of line-framed JSON. Each line is
//! turned into a [`StreamFrame`](workdeck_domain::StreamFrame) by a
//! per-provider [`FrameDecoder`], and [`ChatAccumulator`] concatenates the
//! text-carrying frames in arrival order.
//!
//! Adding a backend means writing one `fn(&str) -> StreamFrame`; the
//! accumulator itself never inspects JSON.

pub mod accumulator;
pub mod frames;

pub use accumulator::{accumulate, accumulate_with_decoder, ChatAccumulator};
pub use frames::{decode_ndjson_line, decode_sse_line, decoder_for, FrameDecoder};

//! # Workdeck Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Stream frame decoders and the chat response accumulator
//! - Port interfaces (traits) for chat backends
//! - The work-item calendar service
//!
//! ## Architecture Principles
//! - Only depends on `workdeck-domain`
//! - No HTTP or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod calendar;
pub mod chat;
pub mod stream;

// Re-export specific items to avoid ambiguity
pub use calendar::{assignees, filter_by_assignees, WorkItemCalendar};
pub use chat::ports::ChatBackend;
pub use chat::ChatService;
pub use stream::{accumulate, accumulate_with_decoder, decoder_for, ChatAccumulator, FrameDecoder};

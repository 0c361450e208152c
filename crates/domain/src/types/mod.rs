//! Domain types and models

pub mod calendar;
pub mod chat;

pub use calendar::{CalendarEvent, ColorCategory, EventDetail, EventNote, WorkItem};
pub use chat::{Framing, StreamFrame};

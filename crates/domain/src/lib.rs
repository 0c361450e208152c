//! # Workdeck Domain
//!
//! Business domain types and pure transforms for Workdeck.
//!
//! This crate contains:
//! - Domain data types (WorkItem, CalendarEvent, StreamFrame, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - The CSV parser and work-item to calendar-event mapper
//!
//! ## Architecture
//! - No dependencies on other Workdeck crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export the work-item pipeline
pub use utils::csv::parse_csv;
pub use utils::work_item::map_to_event;

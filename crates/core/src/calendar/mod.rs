//! Work-item calendar use cases

pub mod filter;
pub mod service;

pub use filter::{assignees, filter_by_assignees};
pub use service::WorkItemCalendar;

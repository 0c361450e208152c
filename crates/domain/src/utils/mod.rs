//! Pure transforms over domain types

pub mod csv;
pub mod pull_request;
pub mod work_item;

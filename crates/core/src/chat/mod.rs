//! Chat completion use cases

pub mod ports;
pub mod service;

pub use service::ChatService;

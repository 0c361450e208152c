pub mod calendar;
pub mod chat;
pub mod proxy;
pub mod pull_request;

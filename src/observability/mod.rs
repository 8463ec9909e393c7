//! Observability for phonedb
//!
//! Structured logging only. One log line = one event.

mod logger;

pub use logger::{Logger, Severity};

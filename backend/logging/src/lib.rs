//! Structured logging for Inkwiz.
//!
//! Handles subscriber setup (console plus optional NDJSON file) and scrubbing
//! of credentials from error causes before they reach a log line.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_sensitive_data;

//! Structured logging to stderr (JSON lines or plain text).

mod format;

pub use format::StructuredLogger;

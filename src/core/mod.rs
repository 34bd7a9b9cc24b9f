//! Core logger types and traits

pub mod caller;
pub mod error;
pub mod field;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod request_context;
pub mod sink;

pub use caller::CallerInfo;
pub use error::{LoggerError, Result};
pub use field::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use options::{LoggerConfig, LoggerOptions};
pub use request_context::RequestContext;
pub use sink::Sink;

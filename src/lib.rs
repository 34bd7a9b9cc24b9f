//! # splitlog
//!
//! A structured JSON logging facade with split output streams and
//! request-scoped field enrichment.
//!
//! ## Features
//!
//! - **Dual-Sink Routing**: info-level records and error-and-above records
//!   go to independent sinks; each record lands in exactly one
//! - **Field Enrichment**: contextual fields derived from the request merge
//!   under explicit call-site fields (explicit wins)
//! - **Thread Safe**: designed for concurrent request handlers
//! - **Easy to Use**: builder-style options with documented defaults
//!
//! ## Example
//!
//! ```
//! use splitlog::prelude::*;
//!
//! let logger = Logger::new(
//!     LoggerOptions::new()
//!         .with_level("debug")
//!         .with_module("gateway")
//!         .with_service_name("api"),
//! )
//! .unwrap();
//!
//! let ctx = RequestContext {
//!     request_id: Some("req-1".to_string()),
//!     ..Default::default()
//! };
//! logger.info(&ctx, "request handled", LogContext::new().with_field("status", 200));
//! ```

pub mod core;
pub mod macros;
pub mod registry;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallerInfo, FieldValue, LogContext, LogEntry, LogLevel, Logger, LoggerConfig,
        LoggerError, LoggerOptions, RequestContext, Result, Sink,
    };
    pub use crate::registry::{AppContext, AppContextBuilder};
    pub use crate::sinks::{FileSink, WriterSink};
}

pub use self::core::{
    CallerInfo, FieldValue, LogContext, LogEntry, LogLevel, Logger, LoggerConfig, LoggerError,
    LoggerOptions, RequestContext, Result, Sink,
};
pub use registry::{AppContext, AppContextBuilder};
pub use sinks::{FileSink, WriterSink};

//! Sink trait for log record destinations
//!
//! A sink is a destination byte stream for encoded records. Implementations
//! must be safe to hand across threads; the logger serializes access to each
//! sink behind a mutex.

use super::error::Result;

pub trait Sink: Send {
    /// Write one encoded record (without trailing newline)
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

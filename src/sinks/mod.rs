//! Sink implementations

pub mod file;
pub mod writer;

pub use file::FileSink;
pub use writer::WriterSink;

// Re-export the trait alongside its implementations
pub use crate::core::Sink;

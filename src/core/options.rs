//! Logger configuration: declared config and effective options

use super::sink::Sink;
use crate::sinks::{FileSink, WriterSink};
use serde::Deserialize;
use std::io::Write;
use std::path::PathBuf;

use super::error::Result;

/// Declared logging configuration, typically parsed from a configuration file
///
/// File paths open append-mode file sinks; the level seeds the effective
/// options and can still be overridden by a later `with_level` call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub info_file: Option<PathBuf>,
    #[serde(default)]
    pub error_file: Option<PathBuf>,
    #[serde(default)]
    pub level: String,
}

/// Effective logger configuration, consumed once by `Logger::new`
///
/// Setters apply in call order; the last write wins per field.
pub struct LoggerOptions {
    pub(crate) level: String,
    pub(crate) caller_skip: usize,
    pub(crate) module: String,
    pub(crate) service_name: String,
    pub(crate) info_sink: Option<Box<dyn Sink>>,
    pub(crate) error_sink: Option<Box<dyn Sink>>,
}

impl Default for LoggerOptions {
    /// Defaults: level "info", caller skip 1, module and service name
    /// "default", both sinks standard output.
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            caller_skip: 1,
            module: "default".to_string(),
            service_name: "default".to_string(),
            info_sink: None,
            error_sink: None,
        }
    }
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed options from declared configuration
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let mut options = Self::new().with_level(&config.level);
        if let Some(path) = &config.info_file {
            options = options.with_info_sink(FileSink::new(path)?);
        }
        if let Some(path) = &config.error_file {
            options = options.with_error_sink(FileSink::new(path)?);
        }
        Ok(options)
    }

    /// Set the severity threshold (string form, parsed at construction)
    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    /// Set the number of stack frames skipped for caller attribution
    #[must_use = "builder methods return a new value"]
    pub fn with_caller_skip(mut self, skip: usize) -> Self {
        self.caller_skip = skip;
        self
    }

    /// Set the fixed `module` field stamped on every record
    #[must_use = "builder methods return a new value"]
    pub fn with_module(mut self, module: &str) -> Self {
        self.module = module.to_string();
        self
    }

    /// Set the fixed `serviceName` field stamped on every record
    #[must_use = "builder methods return a new value"]
    pub fn with_service_name(mut self, service_name: &str) -> Self {
        self.service_name = service_name.to_string();
        self
    }

    /// Set the info sink (records between the threshold and info level)
    #[must_use = "builder methods return a new value"]
    pub fn with_info_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.info_sink = Some(Box::new(sink));
        self
    }

    /// Set the error sink (records at warn level and above)
    #[must_use = "builder methods return a new value"]
    pub fn with_error_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.error_sink = Some(Box::new(sink));
        self
    }

    /// Convenience: wrap a raw writer as the info sink
    #[must_use = "builder methods return a new value"]
    pub fn with_info_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.with_info_sink(WriterSink::new(writer))
    }

    /// Convenience: wrap a raw writer as the error sink
    #[must_use = "builder methods return a new value"]
    pub fn with_error_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.with_error_sink(WriterSink::new(writer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let options = LoggerOptions::new();
        assert_eq!(options.level, "info");
        assert_eq!(options.caller_skip, 1);
        assert_eq!(options.module, "default");
        assert_eq!(options.service_name, "default");
        assert!(options.info_sink.is_none());
        assert!(options.error_sink.is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let options = LoggerOptions::new()
            .with_module("a")
            .with_module("b")
            .with_level("debug")
            .with_level("warn");

        assert_eq!(options.module, "b");
        assert_eq!(options.level, "warn");
    }

    #[test]
    fn test_from_config_opens_file_sinks() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig {
            info_file: Some(dir.path().join("info.log")),
            error_file: Some(dir.path().join("error.log")),
            level: "debug".to_string(),
        };

        let options = LoggerOptions::from_config(&config).unwrap();
        assert_eq!(options.level, "debug");
        assert!(options.info_sink.is_some());
        assert!(options.error_sink.is_some());
    }

    #[test]
    fn test_config_deserializes_with_missing_keys() {
        let config: LoggerConfig = serde_json::from_str("{\"level\":\"warn\"}").unwrap();
        assert_eq!(config.level, "warn");
        assert!(config.info_file.is_none());
    }
}

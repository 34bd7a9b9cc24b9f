//! The logger facade: severity gating, dual-sink routing, field merging

use super::{
    caller,
    error::Result,
    field::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
    options::LoggerOptions,
    request_context::RequestContext,
    sink::Sink,
};
use crate::sinks::WriterSink;
use parking_lot::Mutex;
use std::panic::Location;

/// A configured logging instance
///
/// The severity threshold and both sinks are immutable for the instance's
/// lifetime. Every record is stamped with the fixed `module` and
/// `serviceName` fields injected at construction. Records route to exactly
/// one sink: the info sink accepts severities between the threshold and
/// info, the error sink accepts severities at warn and above; records below
/// the threshold are dropped.
pub struct Logger {
    level: LogLevel,
    caller_skip: usize,
    base_fields: LogContext,
    info_sink: Mutex<Box<dyn Sink>>,
    error_sink: Mutex<Box<dyn Sink>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("caller_skip", &self.caller_skip)
            .field("base_fields", &self.base_fields)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Construct a logger from effective options
    ///
    /// Fails with `LoggerError::InvalidLevel` when the threshold string is
    /// not a recognized token; no partial logger is returned.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        let level: LogLevel = options.level.parse()?;

        let base_fields = LogContext::new()
            .with_field("module", options.module.as_str())
            .with_field("serviceName", options.service_name.as_str());

        let info_sink = options
            .info_sink
            .unwrap_or_else(|| Box::new(WriterSink::stdout()));
        let error_sink = options
            .error_sink
            .unwrap_or_else(|| Box::new(WriterSink::stdout()));

        Ok(Self {
            level,
            caller_skip: options.caller_skip,
            base_fields,
            info_sink: Mutex::new(info_sink),
            error_sink: Mutex::new(error_sink),
        })
    }

    /// The configured severity threshold
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[track_caller]
    pub fn debug(&self, ctx: &RequestContext, msg: impl Into<String>, fields: LogContext) {
        self.log(LogLevel::Debug, ctx, msg.into(), fields, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, ctx: &RequestContext, msg: impl Into<String>, fields: LogContext) {
        self.log(LogLevel::Info, ctx, msg.into(), fields, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, ctx: &RequestContext, msg: impl Into<String>, fields: LogContext) {
        self.log(LogLevel::Warn, ctx, msg.into(), fields, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, ctx: &RequestContext, msg: impl Into<String>, fields: LogContext) {
        self.log(LogLevel::Error, ctx, msg.into(), fields, Location::caller());
    }

    /// Emit at fatal severity, then terminate the process with exit code 1
    #[track_caller]
    pub fn fatal(&self, ctx: &RequestContext, msg: impl Into<String>, fields: LogContext) -> ! {
        self.log(LogLevel::Fatal, ctx, msg.into(), fields, Location::caller());
        let _ = self.flush();
        std::process::exit(1);
    }

    /// Flush both sinks
    pub fn flush(&self) -> Result<()> {
        self.info_sink.lock().flush()?;
        self.error_sink.lock().flush()?;
        Ok(())
    }

    fn accepts_info(&self, level: LogLevel) -> bool {
        level >= self.level && level <= LogLevel::Info
    }

    fn accepts_error(&self, level: LogLevel) -> bool {
        level >= self.level && level >= LogLevel::Warn
    }

    fn log(
        &self,
        level: LogLevel,
        ctx: &RequestContext,
        message: String,
        fields: LogContext,
        fallback: &'static Location<'static>,
    ) {
        let to_info = self.accepts_info(level);
        let to_error = self.accepts_error(level);
        if !to_info && !to_error {
            return;
        }

        // Explicit call-site fields win over contextual fields, which win
        // over the fixed module/serviceName fields.
        let mut merged = fields;
        merged.merge_missing(&ctx.to_fields());
        merged.merge_missing(&self.base_fields);

        // Stack traces attach to error-sink records only.
        let info = caller::capture(self.caller_skip, to_error);
        let file = info.file.or_else(|| {
            Some(format!(
                "{}:{}",
                short_file(fallback.file()),
                fallback.line()
            ))
        });

        let entry = LogEntry::new(level, message)
            .with_fields(merged)
            .with_caller(file, info.func)
            .with_stack(info.stack);

        let line = match entry.to_json() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("[LOGGER ERROR] failed to encode record: {}", e);
                return;
            }
        };

        if to_info {
            let mut sink = self.info_sink.lock();
            if let Err(e) = sink.write_line(&line) {
                eprintln!("[LOGGER ERROR] {} sink write failed: {}", sink.name(), e);
            }
        }
        if to_error {
            let mut sink = self.error_sink.lock();
            if let Err(e) = sink.write_line(&line) {
                eprintln!("[LOGGER ERROR] {} sink write failed: {}", sink.name(), e);
            }
        }
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

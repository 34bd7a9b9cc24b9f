//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Fields beyond the
//! message go through the method API with an explicit [`LogContext`].
//!
//! [`LogContext`]: crate::LogContext
//!
//! # Examples
//!
//! ```
//! use splitlog::prelude::*;
//! use splitlog::info;
//!
//! let logger = Logger::new(LoggerOptions::new()).unwrap();
//! let ctx = RequestContext::new();
//!
//! // Basic logging
//! info!(logger, ctx, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, ctx, "Server listening on port {}", port);
//! ```

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.debug(&$ctx, format!($($arg)+), $crate::LogContext::new())
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.info(&$ctx, format!($($arg)+), $crate::LogContext::new())
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.warn(&$ctx, format!($($arg)+), $crate::LogContext::new())
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.error(&$ctx, format!($($arg)+), $crate::LogContext::new())
    };
}

/// Log a fatal-level message and terminate the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.fatal(&$ctx, format!($($arg)+), $crate::LogContext::new())
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, LoggerOptions, RequestContext};

    fn quiet_logger() -> Logger {
        Logger::new(
            LoggerOptions::new()
                .with_info_writer(std::io::sink())
                .with_error_writer(std::io::sink()),
        )
        .unwrap()
    }

    #[test]
    fn test_info_macro() {
        let logger = quiet_logger();
        let ctx = RequestContext::new();
        info!(logger, ctx, "Info message");
        info!(logger, ctx, "Items: {}", 100);
    }

    #[test]
    fn test_warn_macro() {
        let logger = quiet_logger();
        let ctx = RequestContext::new();
        warn!(logger, ctx, "Retry {} of {}", 1, 3);
    }

    #[test]
    fn test_error_macro() {
        let logger = quiet_logger();
        let ctx = RequestContext::new();
        error!(logger, ctx, "Code: {}", 500);
    }
}

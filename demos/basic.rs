//! Basic usage of the logging facade

use splitlog::prelude::*;
use std::sync::Arc;

fn main() -> splitlog::Result<()> {
    let logger = Logger::new(
        LoggerOptions::new()
            .with_level("debug")
            .with_module("demo")
            .with_service_name("basic"),
    )?;

    let ctx = RequestContext {
        request_id: Some("req-42".to_string()),
        method: Some("GET".to_string()),
        path: Some("/health".to_string()),
        ..Default::default()
    };

    logger.debug(&ctx, "checking backend", LogContext::new());
    logger.info(
        &ctx,
        "request handled",
        LogContext::new()
            .with_field("status", 200)
            .with_field("elapsed", std::time::Duration::from_millis(12)),
    );
    logger.warn(&ctx, "cache miss", LogContext::new().with_field("key", "user:1"));

    let app = AppContext::builder()
        .logger(Arc::new(logger))
        .build()?;
    splitlog::info!(app.logger(), ctx, "application wired");

    app.logger().flush()?;
    Ok(())
}

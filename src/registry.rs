//! Application context: shared singletons wired once at startup
//!
//! Instead of a process-wide mutable registry, shared dependencies live in an
//! explicit [`AppContext`] constructed once by the bootstrap sequence and
//! passed by reference to the components that need it. The logger has a
//! dedicated slot; the external collaborators (config loader, database
//! handle, cache client, service-discovery client, RPC client) are stored in
//! type-keyed slots, so tests can construct isolated contexts with fakes.
//!
//! # Example
//!
//! ```
//! use splitlog::prelude::*;
//! use std::sync::Arc;
//!
//! struct CacheClient;
//!
//! let logger = Arc::new(Logger::new(LoggerOptions::new()).unwrap());
//! let app = AppContext::builder()
//!     .logger(Arc::clone(&logger))
//!     .register(CacheClient)
//!     .build()
//!     .unwrap();
//!
//! assert!(app.get::<CacheClient>().is_some());
//! ```

use crate::core::{Logger, LoggerError, Result};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable set of shared singletons, populated once at startup
pub struct AppContext {
    logger: Arc<Logger>,
    slots: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("logger", &self.logger)
            .field("slot_count", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl AppContext {
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::new()
    }

    /// The shared logger instance
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Look up a shared dependency by its type
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| Arc::clone(slot).downcast::<T>().ok())
    }

    /// Check whether a dependency of the given type is registered
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<T>())
    }
}

/// Builder consumed once by the startup sequence
#[derive(Default)]
pub struct AppContextBuilder {
    logger: Option<Arc<Logger>>,
    slots: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl AppContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shared logger (required)
    #[must_use = "builder methods return a new value"]
    pub fn logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Register a shared dependency under its type
    ///
    /// Registering the same type twice keeps the last value.
    #[must_use = "builder methods return a new value"]
    pub fn register<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.slots.insert(TypeId::of::<T>(), Arc::new(value));
        self
    }

    /// Register an already-shared dependency under its type
    #[must_use = "builder methods return a new value"]
    pub fn register_arc<T: Any + Send + Sync>(mut self, value: Arc<T>) -> Self {
        self.slots.insert(TypeId::of::<T>(), value);
        self
    }

    pub fn build(self) -> Result<AppContext> {
        let logger = self
            .logger
            .ok_or_else(|| LoggerError::config("AppContext", "logger slot is required"))?;
        Ok(AppContext {
            logger,
            slots: self.slots,
        })
    }
}

//! Log record structure and its fixed JSON encoding

use super::field::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// Timestamp format used in every record: second precision, no timezone
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One log record, carrying the merged field set
///
/// The encoding is fixed and not user-configurable: one JSON object per line
/// with `msg`, `level`, `time`, `file`, `func`, `stack` (error-sink records
/// only) and the merged fields.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: Option<String>,
    pub func: Option<String>,
    pub stack: Option<String>,
    pub fields: LogContext,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            timestamp: Local::now(),
            file: None,
            func: None,
            stack: None,
            fields: LogContext::new(),
        }
    }

    pub fn with_fields(mut self, fields: LogContext) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_caller(mut self, file: Option<String>, func: Option<String>) -> Self {
        self.file = file;
        self.func = func;
        self
    }

    pub fn with_stack(mut self, stack: Option<String>) -> Self {
        self.stack = stack;
        self
    }

    /// Encode as a single JSON line
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut map = serde_json::Map::new();
        map.insert(
            "level".to_string(),
            serde_json::Value::String(self.level.to_str().to_string()),
        );
        map.insert(
            "time".to_string(),
            serde_json::Value::String(self.timestamp.format(TIME_FORMAT).to_string()),
        );
        map.insert(
            "msg".to_string(),
            serde_json::Value::String(self.message.clone()),
        );
        if let Some(file) = &self.file {
            map.insert("file".to_string(), serde_json::Value::String(file.clone()));
        }
        if let Some(func) = &self.func {
            map.insert("func".to_string(), serde_json::Value::String(func.clone()));
        }
        if let Some(stack) = &self.stack {
            map.insert("stack".to_string(), serde_json::Value::String(stack.clone()));
        }
        for (key, value) in self.fields.fields() {
            map.insert(key.clone(), value.to_json_value());
        }
        serde_json::to_string(&serde_json::Value::Object(map))
    }
}

//! Request-scoped context and best-effort field extraction

use super::field::{FieldValue, LogContext};
use serde::{Deserialize, Serialize};

/// Request-scoped metadata attached to every log call made while handling
/// the request.
///
/// The set of recognized keys is closed; unset keys are omitted from the
/// extracted field map. Wire names follow the output record shape
/// (`requestId`, `traceId`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(rename = "traceId", skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,

    #[serde(rename = "method", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(rename = "path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(rename = "clientIp", skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,

    #[serde(rename = "hostIp", skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,

    #[serde(rename = "port", skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,

    #[serde(rename = "api", skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
}

impl RequestContext {
    /// Create an empty context (no contextual fields)
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the contextual field map from this context.
    ///
    /// Best-effort: a conversion failure degrades to an empty map, never an
    /// error. Must not log or block.
    pub fn to_fields(&self) -> LogContext {
        let mut fields = LogContext::new();
        if let Ok(serde_json::Value::Object(map)) = serde_json::to_value(self) {
            for (key, value) in map {
                fields.add_field(key, FieldValue::from_json(value));
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_yields_no_fields() {
        let ctx = RequestContext::new();
        assert!(ctx.to_fields().is_empty());
    }

    #[test]
    fn test_extraction_uses_wire_names() {
        let ctx = RequestContext {
            request_id: Some("req-1".to_string()),
            trace_id: Some("trace-9".to_string()),
            client_ip: Some("10.0.0.1".to_string()),
            port: Some(8080),
            ..Default::default()
        };

        let fields = ctx.to_fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(
            fields.fields().get("requestId"),
            Some(&FieldValue::String("req-1".to_string()))
        );
        assert_eq!(
            fields.fields().get("traceId"),
            Some(&FieldValue::String("trace-9".to_string()))
        );
        assert_eq!(
            fields.fields().get("clientIp"),
            Some(&FieldValue::String("10.0.0.1".to_string()))
        );
        assert_eq!(fields.fields().get("port"), Some(&FieldValue::Int(8080)));
    }

    #[test]
    fn test_unset_keys_are_omitted() {
        let ctx = RequestContext {
            request_id: Some("req-2".to_string()),
            ..Default::default()
        };

        let fields = ctx.to_fields();
        assert_eq!(fields.len(), 1);
        assert!(!fields.fields().contains_key("traceId"));
    }
}

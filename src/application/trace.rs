//! Chat engine traces - the inbound side of the extension.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Trace type that renders a multi-select form.
pub const MULTI_SELECT_TRACE_TYPE: &str = "multi_select";

/// One trace emitted by the chat engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<JsonValue>,
}

impl Trace {
    pub fn new(trace_type: impl Into<String>, payload: JsonValue) -> Self {
        Self {
            trace_type: trace_type.into(),
            payload: Some(payload),
        }
    }

    /// Builds a `multi_select` trace.
    pub fn multi_select(payload: JsonValue) -> Self {
        Self::new(MULTI_SELECT_TRACE_TYPE, payload)
    }

    /// True for `multi_select` traces that carry a payload.
    pub fn is_multi_select(&self) -> bool {
        self.trace_type == MULTI_SELECT_TRACE_TYPE
            && self.payload.as_ref().map_or(false, |p| !p.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_multi_select_with_payload() {
        assert!(Trace::multi_select(json!({"sections": []})).is_multi_select());
    }

    #[test]
    fn other_types_do_not_match() {
        assert!(!Trace::new("choice", json!({})).is_multi_select());
    }

    #[test]
    fn missing_or_null_payload_does_not_match() {
        let bare: Trace = serde_json::from_str(r#"{"type":"multi_select"}"#).unwrap();
        assert!(!bare.is_multi_select());

        let null: Trace = serde_json::from_str(r#"{"type":"multi_select","payload":null}"#).unwrap();
        assert!(!null.is_multi_select());
    }
}

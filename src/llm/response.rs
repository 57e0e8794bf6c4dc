//! Normalization of chat-completion output into plain text.
//!
//! The provider may return free text, or (in JSON mode) an object wrapping the
//! text under `content` or `plan`. The shape is classified once, here, and the
//! rest of the pipeline only ever sees a `String`.

use serde_json::{Map, Value};

/// Classified output of a generation call.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutput {
    /// Free text, the common case
    PlainText(String),
    /// Object with a textual `content` field
    StructuredContent(String),
    /// Object with a textual `plan` field (and no `content`)
    StructuredPlan(String),
    /// Any other object
    Structured(Map<String, Value>),
}

impl GenerationOutput {
    /// Classify raw message text. Only a JSON object is treated as structured.
    pub fn from_message(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.starts_with('{') {
            if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed) {
                return Self::from_value(value);
            }
        }
        Self::PlainText(text.to_string())
    }

    /// Classify an arbitrary JSON value.
    ///
    /// `content` wins over `plan`, and both win over the generic object form.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Self::PlainText(s),
            Value::Object(map) => {
                if let Some(Value::String(content)) = map.get("content") {
                    return Self::StructuredContent(content.clone());
                }
                if let Some(Value::String(plan)) = map.get("plan") {
                    return Self::StructuredPlan(plan.clone());
                }
                Self::Structured(map)
            }
            other => Self::PlainText(other.to_string()),
        }
    }

    /// Collapse to a single string. Never fails.
    pub fn into_text(self) -> String {
        match self {
            Self::PlainText(s) | Self::StructuredContent(s) | Self::StructuredPlan(s) => s,
            Self::Structured(map) => {
                let value = Value::Object(map);
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

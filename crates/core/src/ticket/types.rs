use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record from an exported ticket dump.
///
/// Exports differ between instances, so no schema is enforced beyond
/// "is a JSON object": every field is kept verbatim and queried by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(Map<String, Value>);

impl Ticket {
    /// Wrap an already-parsed field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Identifier for reports: `sys_id` when present and non-empty,
    /// else `number`, else `"unknown"`.
    pub fn id(&self) -> String {
        self.field_str("sys_id")
            .filter(|s| !s.is_empty())
            .or_else(|| self.field_str("number").filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// The `number` field, empty when absent.
    pub fn number(&self) -> String {
        self.field_str("number").unwrap_or_default()
    }

    /// Render a field as text. Strings come back verbatim, numbers and
    /// booleans in their JSON form. Null and missing fields yield `None`.
    pub fn field_str(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Pretty JSON rendering for embedding in prompts.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

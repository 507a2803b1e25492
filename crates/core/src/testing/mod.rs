//! Testing utilities and mock implementations.
//!
//! This module provides a mock LLM client and ticket fixtures, allowing
//! evaluation runs to be tested end to end without a real endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticketlint_core::testing::{fixtures, MockLlmClient};
//!
//! let client = MockLlmClient::new();
//!
//! // Script a reply
//! client
//!     .queue_reply(&fixtures::verdict_reply("incident", &["priority must be set"], ""))
//!     .await;
//!
//! let ticket = fixtures::incident("INC001", "vpn unreachable");
//!
//! // Use with TicketEvaluator...
//! ```

mod mock_llm;

pub use mock_llm::MockLlmClient;

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::ticket::Ticket;

    /// Create a ticket from a JSON value.
    ///
    /// Panics if the value is not a JSON object.
    pub fn ticket(value: Value) -> Ticket {
        match value {
            Value::Object(fields) => Ticket::new(fields),
            other => panic!("fixture ticket must be a JSON object, got {other}"),
        }
    }

    /// Create a test incident ticket with reasonable defaults.
    pub fn incident(number: &str, short_description: &str) -> Ticket {
        ticket(json!({
            "sys_id": format!("sys-{}", number.to_lowercase()),
            "number": number,
            "short_description": short_description,
            "description": "User reports the issue in detail.",
            "priority": "2",
            "assignment_group": "service-desk",
        }))
    }

    /// Build a model reply in the schema the evaluator expects.
    ///
    /// The completeness flag is consistent with the unmet rules.
    pub fn verdict_reply(ticket_type: &str, unmet_rules: &[&str], remarks: &str) -> String {
        json!({
            "type": ticket_type,
            "completeness": unmet_rules.is_empty(),
            "unmet_rules": unmet_rules,
            "remarks": remarks,
        })
        .to_string()
    }
}

use serde::{Deserialize, Serialize};

use crate::ticket::Ticket;

/// One report row: the outcome of evaluating a single ticket.
///
/// `completeness` holds exactly when `unmet_rules` is empty. Tickets
/// whose evaluation failed carry the failure in `error` and still
/// occupy a row, so report length always matches the input dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketVerdict {
    pub ticket_id: String,
    pub ticket_number: String,
    /// Model-classified category (incident/request/other).
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub completeness: bool,
    /// Texts of the rules judged unmet, quoted from the rule list.
    pub unmet_rules: Vec<String>,
    /// Concise guidance from the model.
    pub remarks: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TicketVerdict {
    /// Verdict for a ticket the model evaluated. The completeness flag
    /// is derived from the unmet rule list.
    pub fn evaluated(
        ticket: &Ticket,
        ticket_type: String,
        unmet_rules: Vec<String>,
        remarks: String,
    ) -> Self {
        Self {
            ticket_id: ticket.id(),
            ticket_number: ticket.number(),
            ticket_type,
            completeness: unmet_rules.is_empty(),
            unmet_rules,
            remarks,
            error: None,
        }
    }

    /// Verdict for a ticket whose evaluation failed.
    pub fn failed(ticket: &Ticket, error: &str) -> Self {
        Self {
            ticket_id: ticket.id(),
            ticket_number: ticket.number(),
            ticket_type: String::new(),
            completeness: false,
            unmet_rules: Vec::new(),
            remarks: "Evaluation failed; see error".to_string(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

//! Ticket-by-ticket completeness evaluation.
//!
//! Sends one chat-completion request per ticket, carrying the full rule
//! list in the system prompt, and turns the model's JSON reply into a
//! report verdict.

use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::evaluator::llm::{CompletionRequest, LlmClient, LlmError};
use crate::report::TicketVerdict;
use crate::ticket::Ticket;

/// Configuration for the evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Maximum tokens for the model reply.
    pub max_tokens: u32,
    /// Temperature for generation.
    pub temperature: f32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_tokens: 8000,
            temperature: 0.2,
        }
    }
}

/// Error type for a single ticket evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    #[error("LLM request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed model reply: {0}")]
    MalformedReply(String),
}

/// LLM-backed completeness evaluator.
///
/// Generic over the client type so tests can script replies without a
/// real endpoint.
pub struct TicketEvaluator<C: LlmClient> {
    client: Arc<C>,
    rules: Vec<String>,
    config: EvaluatorConfig,
}

impl<C: LlmClient> TicketEvaluator<C> {
    /// Create a new evaluator over the given rule list.
    pub fn new(client: Arc<C>, rules: Vec<String>) -> Self {
        Self {
            client,
            rules,
            config: EvaluatorConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(client: Arc<C>, rules: Vec<String>, config: EvaluatorConfig) -> Self {
        Self {
            client,
            rules,
            config,
        }
    }

    /// Build the system prompt carrying the reply contract and rule list.
    fn build_system_prompt(&self) -> String {
        let mut prompt = String::from(
            r#"You are a meticulous ITSM validator for ServiceNow tickets.
Analyze the provided ticket against the completeness rules and return a JSON object with this exact structure:

{
  "type": "string (incident/request/other)",
  "completeness": boolean,
  "unmet_rules": ["exact text of each rule the ticket does not satisfy"],
  "remarks": "string (concise guidance)"
}

Quote unmet rules verbatim from the list below. Return an empty array when every rule is satisfied.

Rules to apply:
"#,
        );
        for rule in &self.rules {
            prompt.push_str(&format!("- {}\n", rule));
        }
        prompt
    }

    /// Build the user prompt embedding the ticket's fields.
    fn build_user_prompt(&self, ticket: &Ticket) -> String {
        format!(
            "Analyze this ServiceNow ticket for completeness:\n\n{}\n\nReturn ONLY the JSON object, no other text or markdown.",
            ticket.to_pretty_json()
        )
    }

    /// Parse the model reply into a verdict structure.
    fn parse_reply(&self, text: &str) -> Result<VerdictReply, EvaluatorError> {
        let cleaned = strip_code_fence(text);

        // Models sometimes wrap the object in prose; take the outermost braces.
        // Missing or reversed braces fall through to the raw text.
        let json_str = match (cleaned.find('{'), cleaned.rfind('}')) {
            (Some(start), Some(end)) if start <= end => &cleaned[start..=end],
            _ => cleaned,
        };

        serde_json::from_str(json_str).map_err(|e| {
            EvaluatorError::MalformedReply(format!("{} - reply: {}", e, text))
        })
    }

    /// Evaluate a single ticket against the rule list.
    pub async fn evaluate_ticket(&self, ticket: &Ticket) -> Result<TicketVerdict, EvaluatorError> {
        let request = CompletionRequest::new(self.build_user_prompt(ticket))
            .with_system(self.build_system_prompt())
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature);

        let response = self.client.complete(request).await?;
        debug!(
            ticket_id = %ticket.id(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Model reply received"
        );

        let reply = self.parse_reply(&response.text)?;

        // The flag is always derived from the unmet list, never trusted
        // from the model verbatim.
        let derived = reply.unmet_rules.is_empty();
        if let Some(claimed) = reply.completeness {
            if claimed != derived {
                warn!(
                    ticket_id = %ticket.id(),
                    claimed,
                    unmet = reply.unmet_rules.len(),
                    "Model completeness flag disagrees with its unmet rule list"
                );
            }
        }
        for rule in &reply.unmet_rules {
            if !self.rules.iter().any(|r| r == rule) {
                debug!(
                    ticket_id = %ticket.id(),
                    rule = %rule,
                    "Reply names a rule outside the configured list"
                );
            }
        }

        Ok(TicketVerdict::evaluated(
            ticket,
            reply.ticket_type.unwrap_or_else(|| "other".to_string()),
            reply.unmet_rules,
            reply.remarks.unwrap_or_default(),
        ))
    }

    /// Evaluate every ticket in order, one request at a time.
    ///
    /// Endpoint and parse failures are captured in the verdict for the
    /// affected ticket, so the result always holds one verdict per input.
    pub async fn evaluate_all(&self, tickets: &[Ticket]) -> Vec<TicketVerdict> {
        let total = tickets.len();
        let mut verdicts = Vec::with_capacity(total);

        for (i, ticket) in tickets.iter().enumerate() {
            info!(
                ticket_id = %ticket.id(),
                index = i + 1,
                total,
                "Evaluating ticket"
            );
            match self.evaluate_ticket(ticket).await {
                Ok(verdict) => verdicts.push(verdict),
                Err(e) => {
                    warn!(ticket_id = %ticket.id(), error = %e, "Ticket evaluation failed");
                    verdicts.push(TicketVerdict::failed(ticket, &e.to_string()));
                }
            }
        }

        verdicts
    }
}

/// Strip a surrounding markdown code fence, if present.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };
    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

/// Expected JSON reply from the model for one ticket.
///
/// `unmet_rules` is required since the verdict is derived from it; the
/// other fields are defaulted when absent.
#[derive(Debug, Deserialize)]
struct VerdictReply {
    #[serde(rename = "type", default)]
    ticket_type: Option<String>,
    #[serde(default)]
    completeness: Option<bool>,
    unmet_rules: Vec<String>,
    #[serde(default)]
    remarks: Option<String>,
}

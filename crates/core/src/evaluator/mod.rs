//! LLM-backed ticket completeness evaluation.

pub mod llm;
mod ticket_eval;

pub use llm::{
    AzureOpenAiClient, CompletionRequest, CompletionResponse, LlmClient, LlmError, LlmUsage,
};
pub use ticket_eval::{EvaluatorConfig, EvaluatorError, TicketEvaluator};

pub mod config;
pub mod evaluator;
pub mod report;
pub mod rules;
pub mod testing;
pub mod ticket;

pub use config::{load_config, validate_config, Config, ConfigError, LlmConfig};
pub use evaluator::{
    AzureOpenAiClient, CompletionRequest, CompletionResponse, EvaluatorConfig, EvaluatorError,
    LlmClient, LlmError, LlmUsage, TicketEvaluator,
};
pub use report::{write_reports, ReportError, TicketVerdict};
pub use rules::{load_rules, RulesError};
pub use ticket::{load_tickets, Ticket, TicketError};

//! Per-ticket verdicts and report persistence.

mod types;
mod writer;

pub use types::TicketVerdict;
pub use writer::write_reports;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(String),

    #[error("Failed to write CSV report: {0}")]
    Csv(String),
}

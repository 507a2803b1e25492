//! ServiceNow ticket records and dump loading.

mod loader;
mod types;

pub use loader::load_tickets;
pub use types::Ticket;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("Ticket file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read ticket file: {0}")]
    Io(String),

    #[error("Failed to parse ticket file: {0}")]
    ParseError(String),
}

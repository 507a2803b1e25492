use std::path::Path;
use tracing::debug;

use super::{types::Ticket, TicketError};

/// Load tickets from a JSON file holding a top-level array of records.
pub fn load_tickets(path: &Path) -> Result<Vec<Ticket>, TicketError> {
    if !path.exists() {
        return Err(TicketError::FileNotFound(path.display().to_string()));
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| TicketError::Io(format!("{}: {}", path.display(), e)))?;
    let tickets: Vec<Ticket> =
        serde_json::from_str(&raw).map_err(|e| TicketError::ParseError(e.to_string()))?;

    debug!(count = tickets.len(), path = %path.display(), "Loaded tickets");
    Ok(tickets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_tickets_valid_array() {
        let file = write_file(
            r#"[
                {"sys_id": "a1", "number": "INC001", "short_description": "printer down"},
                {"number": "REQ002"}
            ]"#,
        );
        let tickets = load_tickets(file.path()).unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].id(), "a1");
        assert_eq!(tickets[1].id(), "REQ002");
    }

    #[test]
    fn test_load_tickets_empty_array() {
        let file = write_file("[]");
        let tickets = load_tickets(file.path()).unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_load_tickets_file_not_found() {
        let result = load_tickets(Path::new("/nonexistent/tickets.json"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TicketError::FileNotFound(_)));
    }

    #[test]
    fn test_load_tickets_invalid_json() {
        let file = write_file("{not json");
        let result = load_tickets(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TicketError::ParseError(_)));
    }

    #[test]
    fn test_load_tickets_rejects_top_level_object() {
        let file = write_file(r#"{"number": "INC001"}"#);
        let result = load_tickets(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TicketError::ParseError(_)));
    }

    #[test]
    fn test_load_tickets_rejects_non_object_element() {
        let file = write_file(r#"[{"number": "INC001"}, "stray string"]"#);
        let result = load_tickets(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TicketError::ParseError(_)));
    }
}

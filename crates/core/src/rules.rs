//! Completeness rule loading.
//!
//! A rule is a plain line of text describing a criterion every ticket
//! must satisfy. The rules file is CSV-shaped: the first column of each
//! row is the rule text and remaining columns are ignored, so a plain
//! one-rule-per-line text file parses the same way.

use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Rules file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read rules file: {0}")]
    ReadError(String),
}

/// Load rules from the given file.
///
/// Rule texts are trimmed; empty rows and rows with a blank first
/// column are skipped.
pub fn load_rules(path: &Path) -> Result<Vec<String>, RulesError> {
    if !path.exists() {
        return Err(RulesError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| RulesError::ReadError(e.to_string()))?;

    let mut rules = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| RulesError::ReadError(e.to_string()))?;
        if let Some(first) = record.get(0) {
            let rule = first.trim();
            if !rule.is_empty() {
                rules.push(rule.to_string());
            }
        }
    }

    debug!(count = rules.len(), path = %path.display(), "Loaded rules");
    Ok(rules)
}

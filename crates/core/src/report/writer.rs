use std::path::Path;
use tracing::info;

use super::{types::TicketVerdict, ReportError};

/// CSV column order, mirroring the JSON field order.
const CSV_HEADERS: [&str; 7] = [
    "ticket_id",
    "ticket_number",
    "type",
    "completeness",
    "unmet_rules",
    "remarks",
    "error",
];

/// Write both report files, one entry per verdict in the order given.
pub fn write_reports(
    verdicts: &[TicketVerdict],
    json_path: &Path,
    csv_path: &Path,
) -> Result<(), ReportError> {
    write_json(verdicts, json_path)?;
    write_csv(verdicts, csv_path)?;
    info!(
        rows = verdicts.len(),
        json = %json_path.display(),
        csv = %csv_path.display(),
        "Reports written"
    );
    Ok(())
}

fn write_json(verdicts: &[TicketVerdict], path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(verdicts)
        .map_err(|e| ReportError::Serialize(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| ReportError::Io(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

fn write_csv(verdicts: &[TicketVerdict], path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| ReportError::Io(format!("{}: {}", path.display(), e)))?;

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| ReportError::Csv(e.to_string()))?;

    for verdict in verdicts {
        let completeness = verdict.completeness.to_string();
        let unmet_rules = verdict.unmet_rules.join("; ");
        writer
            .write_record([
                verdict.ticket_id.as_str(),
                verdict.ticket_number.as_str(),
                verdict.ticket_type.as_str(),
                completeness.as_str(),
                unmet_rules.as_str(),
                verdict.remarks.as_str(),
                verdict.error.as_deref().unwrap_or(""),
            ])
            .map_err(|e| ReportError::Csv(e.to_string()))?;
    }

    writer.flush().map_err(|e| ReportError::Csv(e.to_string()))?;
    Ok(())
}

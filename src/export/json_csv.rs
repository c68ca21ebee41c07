// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, ticket_to_row};
use crate::export::{TicketExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed; unrated tickets carry `"rating": null`.
pub(crate) fn export_json(tickets: &[TicketExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(tickets)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one row per ticket; rating pairs joined with `; `.
pub(crate) fn export_csv(tickets: &[TicketExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for item in tickets {
        wtr.write_record(ticket_to_row(item, "; "))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

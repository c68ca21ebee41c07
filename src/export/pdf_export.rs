// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, tickets_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{TicketExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Render the export records as a PDF table; rating pairs one per line.
pub(crate) fn render_pdf(tickets: &[TicketExport], title: &str) -> Vec<u8> {
    let headers = get_headers();
    let data_vec = tickets_to_table(tickets, "\n");

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &data_vec);
    pdf.finish()
}

pub(crate) fn export_pdf(tickets: &[TicketExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let bytes = render_pdf(tickets, title);
    std::fs::write(path, bytes)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

// src/export/logic.rs

use crate::backlog::{BacklogView, Filter};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_export;
use crate::export::pdf_export::{export_pdf, render_pdf};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of the backlog's filtered set.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every ticket of the view's filtered set (all pages).
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `force`: overwrite without asking
    /// - `title`: base document title, completed with the active filter
    pub fn export(
        view: &BacklogView,
        format: ExportFormat,
        file: &str,
        force: bool,
        title: &str,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let records = build_export(view.filtered(), view.users());

        if records.is_empty() {
            warning("No tickets found for the selected filters. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
            ExportFormat::Xlsx => export_xlsx(&records, &path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(title, view.filter());
                export_pdf(&records, &path, &title)?
            }
        }

        Ok(records.len())
    }

    /// PDF bytes for the view's filtered set, without touching the disk.
    pub fn pdf_bytes(view: &BacklogView, title: &str) -> Vec<u8> {
        let records = build_export(view.filtered(), view.users());
        render_pdf(&records, &build_pdf_title(title, view.filter()))
    }
}

/// Document title: the base title plus the active filter.
pub fn build_pdf_title(base: &str, filter: &Filter) -> String {
    let mut title = base.to_string();

    match (filter.start, filter.end) {
        (Some(s), Some(e)) if s == e => title.push_str(&format!(" for {s}")),
        (Some(s), Some(e)) => title.push_str(&format!(" from {s} to {e}")),
        (Some(s), None) => title.push_str(&format!(" since {s}")),
        (None, Some(e)) => title.push_str(&format!(" until {e}")),
        (None, None) => {}
    }

    if let Some(id) = filter.attendant {
        title.push_str(&format!(" (attendant {id})"));
    }

    title
}

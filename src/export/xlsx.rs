// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, ticket_to_row};
use crate::export::{TicketExport, notify_export_success};
use crate::ui::messages::info;
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Column holding the creation date, written as a real Excel date.
const DATE_COL: usize = 2;
/// Column holding the rating lines.
const RATING_COL: usize = 4;

/// Export XLSX with styling and auto column widths.
pub(crate) fn export_xlsx(tickets: &[TicketExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, t) in tickets.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let values = ticket_to_row(t, "\n");

        for (col, value) in values.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col, value, band_color)?;

            let widest = value
                .lines()
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0);
            col_widths[col] = col_widths[col].max(widest);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell; the date column becomes an Excel date, the rating column
/// wraps its lines.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if col == DATE_COL
        && let Some(serial) = excel_date_serial(s)
    {
        let fmt = base.set_num_format("yyyy-mm-dd");
        worksheet
            .write_with_format(row, col as u16, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    let fmt = if col == RATING_COL {
        base.set_text_wrap()
    } else {
        base
    };

    worksheet
        .write_with_format(row, col as u16, s, &fmt)
        .map_err(to_export_error)?;

    Ok(())
}

/// Excel serial for a `YYYY-MM-DD` date (1900 date system).
fn excel_date_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Human form used in listings (`dd/mm/yyyy`).
pub fn display_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

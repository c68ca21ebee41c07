use super::rating::Rating;
use super::user::{join_name, null_as_empty};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Name snapshot of the staff member attached to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendant {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
}

impl Attendant {
    pub fn display_name(&self) -> String {
        join_name(&self.name, &self.last_name)
    }
}

/// A customer-service ticket ("service" on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>, // ⇔ services.created_at (RFC 3339, UTC)
    pub id_attendant: i64,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub register: String,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub attendant: Option<Attendant>,
}

impl Ticket {
    /// Calendar day of creation (UTC), used for date filters and exports.
    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn created_date_str(&self) -> String {
        self.created_date().format("%Y-%m-%d").to_string()
    }
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (`2024-05-01T12:00:00.000Z`), a naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` with optional fractional
/// seconds, or a bare `YYYY-MM-DD`.
/// Naive values are read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}

use crate::errors::{AppError, AppResult};
use crate::models::Ticket;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Transient filter state. Every field is optional; set fields combine
/// conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Exact `id_attendant` match.
    pub attendant: Option<i64>,
    /// Inclusive lower bound on the creation day.
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound on the creation day.
    pub end: Option<NaiveDate>,
}

impl Filter {
    /// Build a filter from raw command-line values (`YYYY-MM-DD`).
    pub fn from_args(
        attendant: Option<i64>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AppResult<Self> {
        let parse = |s: &str| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()));

        Ok(Self {
            attendant,
            start: start.map(parse).transpose()?,
            end: end.map(parse).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.attendant.is_none() && self.start.is_none() && self.end.is_none()
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        let day = ticket.created_date();

        self.attendant.is_none_or(|id| ticket.id_attendant == id)
            && self.start.is_none_or(|start| day >= start)
            && self.end.is_none_or(|end| day <= end)
    }
}

/// Filter `tickets`, preserving server order. The source is never modified.
pub fn apply_filters(tickets: &[Ticket], filter: &Filter) -> Vec<Ticket> {
    if filter.is_empty() {
        return tickets.to_vec();
    }

    tickets
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

// src/export/model.rs

use crate::models::{QuestionAnswer, Ticket, User};
use serde::Serialize;

pub const NO_ATTENDANT: &str = "No attendant";
pub const NO_RATING: &str = "No rating";

/// Flat per-ticket export record.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TicketExport {
    #[serde(rename = "type")]
    pub kind: String,
    pub register: String,
    pub date: String,
    pub attendant: String,
    /// `None` when the ticket has not been rated yet.
    pub rating: Option<Vec<QuestionAnswer>>,
}

impl TicketExport {
    /// Attendant name from the embedded snapshot, else from `users`.
    /// A rating without answers counts as no rating.
    pub fn from_ticket(t: &Ticket, users: &[User]) -> Self {
        let attendant = t
            .attendant
            .as_ref()
            .map(|a| a.display_name())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                users
                    .iter()
                    .find(|u| u.id == t.id_attendant)
                    .map(User::display_name)
                    .filter(|n| !n.is_empty())
            })
            .unwrap_or_else(|| NO_ATTENDANT.to_string());

        Self {
            kind: t.kind.clone(),
            register: t.register.clone(),
            date: t.created_date_str(),
            attendant,
            rating: t
                .rating
                .as_ref()
                .map(|r| r.questions.clone())
                .filter(|qas| !qas.is_empty()),
        }
    }

    /// Rating as `question: answer` lines, or the placeholder.
    pub fn rating_lines(&self) -> Vec<String> {
        match &self.rating {
            Some(qas) if !qas.is_empty() => qas
                .iter()
                .map(|qa| format!("{}: {}", qa.question, qa.answer))
                .collect(),
            _ => vec![NO_RATING.to_string()],
        }
    }
}

/// Header for CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["type", "register", "date", "attendant", "rating"]
}

/// One row of strings; rating lines joined with `sep`.
pub(crate) fn ticket_to_row(t: &TicketExport, sep: &str) -> Vec<String> {
    vec![
        t.kind.clone(),
        t.register.clone(),
        t.date.clone(),
        t.attendant.clone(),
        t.rating_lines().join(sep),
    ]
}

pub(crate) fn tickets_to_table(tickets: &[TicketExport], sep: &str) -> Vec<Vec<String>> {
    tickets.iter().map(|t| ticket_to_row(t, sep)).collect()
}

/// Export records for the whole filtered set, in order.
pub fn build_export(tickets: &[Ticket], users: &[User]) -> Vec<TicketExport> {
    tickets
        .iter()
        .map(|t| TicketExport::from_ticket(t, users))
        .collect()
}

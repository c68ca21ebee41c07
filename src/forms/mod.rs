//! Single-submission forms: required-field validation producing the request
//! body each form posts.

mod login;
mod signup;
mod survey;
mod ticket;

pub use login::LoginForm;
pub use signup::SignupForm;
pub use survey::SurveyForm;
pub use ticket::TicketForm;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every validation failure of one form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Record `message` when `value` is missing or blank.
    pub(crate) fn require(&mut self, field: &'static str, value: Option<&str>, message: &str) {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.push(field, message);
        }
    }

    pub(crate) fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "Invalid form: {}", msgs.join("; "))
    }
}

impl std::error::Error for FormErrors {}

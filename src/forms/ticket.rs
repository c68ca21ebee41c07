use super::FormErrors;
use crate::api::model::CreateServiceRequest;

/// Ticket intake: what was done and the register it was filed under.
#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    pub kind: Option<String>,
    pub register: Option<String>,
}

impl TicketForm {
    /// `attendant_id` is the logged-in user's id.
    pub fn validate(&self, attendant_id: Option<i64>) -> Result<CreateServiceRequest, FormErrors> {
        let mut errs = FormErrors::default();
        errs.require("type", self.kind.as_deref(), "Type is required");
        errs.require("register", self.register.as_deref(), "Register is required");
        if attendant_id.is_none() {
            errs.push("id_attendant", "Session has no user id: log in again");
        }
        errs.into_result()?;

        Ok(CreateServiceRequest {
            kind: self.kind.as_deref().unwrap_or_default().trim().to_string(),
            register: self.register.as_deref().unwrap_or_default().trim().to_string(),
            id_attendant: attendant_id.unwrap_or_default(),
        })
    }
}

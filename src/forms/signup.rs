use super::FormErrors;
use crate::api::model::SignupRequest;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, FormErrors> {
        let mut errs = FormErrors::default();
        errs.require("name", self.name.as_deref(), "Name is required");
        errs.require("last_name", self.last_name.as_deref(), "Last name is required");
        errs.require("email", self.email.as_deref(), "Email is required");
        errs.require("password", self.password.as_deref(), "Password is required");
        errs.require(
            "confirm_password",
            self.confirm_password.as_deref(),
            "Password confirmation is required",
        );

        if let Some(email) = self.email.as_deref().map(str::trim)
            && !email.is_empty()
            && !EMAIL.is_match(email)
        {
            errs.push("email", "Email is not a valid address");
        }

        if !errs.has("password")
            && !errs.has("confirm_password")
            && self.password != self.confirm_password
        {
            errs.push("confirm_password", "Passwords do not match");
        }

        errs.into_result()?;

        Ok(SignupRequest {
            name: trimmed(&self.name),
            last_name: trimmed(&self.last_name),
            email: trimmed(&self.email),
            password: self.password.clone().unwrap_or_default(),
        })
    }
}

fn trimmed(v: &Option<String>) -> String {
    v.as_deref().unwrap_or_default().trim().to_string()
}

use super::FormErrors;
use crate::api::model::LoginRequest;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errs = FormErrors::default();
        errs.require("email", self.email.as_deref(), "Email is required");
        errs.require("password", self.password.as_deref(), "Password is required");
        errs.into_result()?;

        Ok(LoginRequest {
            email: self.email.clone().unwrap_or_default().trim().to_string(),
            password: self.password.clone().unwrap_or_default(),
        })
    }
}

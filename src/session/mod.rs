//! Authenticated session: token, user id and administrator flag.
//!
//! A `Session` is loaded once per process from the [`SessionStore`] and then
//! passed explicitly to the route guard and the command handlers.

mod store;

pub use store::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: Option<String>,
    pub is_admin: bool,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: Option<String>, is_admin: bool) -> Self {
        Self {
            token: token.into(),
            user_id,
            is_admin,
        }
    }

    /// A blank token is no session at all.
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Numeric attendant id, when the stored user id is one.
    pub fn attendant_id(&self) -> Option<i64> {
        self.user_id.as_deref().and_then(|s| s.trim().parse().ok())
    }
}

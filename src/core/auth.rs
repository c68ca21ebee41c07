use crate::api::ApiClient;
use crate::api::model::UserDetail;
use crate::db::log::oplog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::forms::{LoginForm, SignupForm};
use crate::session::{Session, SessionStore};
use tracing::debug;

pub struct AuthLogic;

impl AuthLogic {
    /// Validate, call `POST /login` and persist the returned session.
    pub async fn login(api: &ApiClient, pool: &mut DbPool, form: &LoginForm) -> AppResult<Session> {
        let req = form.validate()?;
        let resp = api.login(&req).await?;
        debug!(admin = resp.adm, "login accepted");

        let session = Session::new(resp.token, resp.user_id, resp.adm);
        if !session.has_token() {
            return Err(AppError::InvalidResponse("login response carried an empty token".into()));
        }

        SessionStore::new(pool).save(&session)?;
        oplog_quiet(&pool.conn, "login", &req.email, "Session stored");

        Ok(session)
    }

    pub async fn signup(api: &ApiClient, form: &SignupForm) -> AppResult<()> {
        let req = form.validate()?;
        api.signup(&req).await
    }

    /// Remove the stored session; returns whether there was one.
    pub fn logout(pool: &mut DbPool) -> AppResult<bool> {
        let had_session = SessionStore::new(pool).load()?.is_some();
        SessionStore::new(pool).clear()?;
        if had_session {
            oplog_quiet(&pool.conn, "logout", "", "Session cleared");
        }
        Ok(had_session)
    }

    /// `GET /user/:id` for the logged-in user.
    pub async fn whoami(api: &ApiClient, session: Option<&Session>) -> AppResult<UserDetail> {
        let session = session
            .filter(|s| s.has_token())
            .ok_or(AppError::NotLoggedIn)?;
        let id = session
            .user_id
            .as_deref()
            .ok_or_else(|| AppError::InvalidResponse("stored session has no user id".into()))?;
        api.user(id).await
    }
}

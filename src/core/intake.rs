use crate::api::ApiClient;
use crate::db::log::oplog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::forms::TicketForm;
use crate::guard::{RequiredRole, require};
use crate::session::Session;

pub struct IntakeLogic;

impl IntakeLogic {
    /// Open a ticket on behalf of the logged-in attendant and return its id.
    pub async fn create(
        api: &ApiClient,
        pool: &mut DbPool,
        session: Option<&Session>,
        form: &TicketForm,
    ) -> AppResult<i64> {
        require(session, RequiredRole::Home)?;

        let attendant = session.and_then(Session::attendant_id);
        let req = form.validate(attendant)?;
        let id = api.create_service(&req).await?;

        oplog_quiet(
            &pool.conn,
            "ticket",
            &id.to_string(),
            &format!("{} / {}", req.kind, req.register),
        );
        Ok(id)
    }
}

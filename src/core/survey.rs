use crate::api::ApiClient;
use crate::db::log::oplog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::forms::SurveyForm;

pub struct SurveyLogic;

impl SurveyLogic {
    /// Submit a complete questionnaire once. No retry on failure.
    pub async fn submit(api: &ApiClient, pool: &mut DbPool, form: &SurveyForm) -> AppResult<()> {
        let req = form.validate()?;
        api.create_rating(&req).await?;

        let summary: Vec<String> = req
            .questions
            .iter()
            .map(|qa| format!("{}={}", qa.question, qa.answer))
            .collect();
        oplog_quiet(
            &pool.conn,
            "rating",
            &req.id_service.to_string(),
            &summary.join(", "),
        );
        Ok(())
    }
}

use crate::api::ApiClient;
use crate::backlog::PageSize;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::session::{Session, SessionStore};
use std::fs;
use std::time::Duration;

/// Everything a command handler needs, built once per invocation.
/// The session is loaded here and passed on explicitly.
pub struct AppContext {
    pub cfg: Config,
    pub pool: DbPool,
    pub session: Option<Session>,
}

impl AppContext {
    pub fn build(cfg: Config) -> AppResult<Self> {
        let db_path = cfg.database_path();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut pool = DbPool::open_initialized(&db_path)?;
        let session = SessionStore::new(&mut pool).load()?;

        Ok(Self { cfg, pool, session })
    }

    /// HTTP client for the configured backend, authorized with the session token.
    pub fn api(&self) -> AppResult<ApiClient> {
        let client = ApiClient::new(
            &self.cfg.api_url,
            Duration::from_secs(self.cfg.request_timeout_secs),
        )?;
        Ok(client.with_token(self.session.as_ref().map(|s| s.token.clone())))
    }

    /// Page size from the command line, else from the configuration.
    pub fn page_size(&self, requested: Option<usize>) -> AppResult<PageSize> {
        PageSize::try_from(requested.unwrap_or(self.cfg.page_size))
    }
}

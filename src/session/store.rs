use super::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

const KEY_TOKEN: &str = "token";
const KEY_USER_ID: &str = "userId";
const KEY_ADMIN: &str = "adm";

/// Persisted key/value session storage backed by the `session_store` table.
pub struct SessionStore<'a> {
    pool: &'a mut DbPool,
}

impl<'a> SessionStore<'a> {
    pub fn new(pool: &'a mut DbPool) -> Self {
        Self { pool }
    }

    /// Overwrite token, user id and admin flag in one transaction.
    pub fn save(&mut self, session: &Session) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let tx = self.pool.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO session_store (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
            )?;

            stmt.execute(params![KEY_TOKEN, session.token, now])?;
            match &session.user_id {
                Some(id) => {
                    stmt.execute(params![KEY_USER_ID, id, now])?;
                }
                None => {
                    tx.execute("DELETE FROM session_store WHERE key = ?1", [KEY_USER_ID])?;
                }
            }
            let adm = if session.is_admin { "true" } else { "false" };
            stmt.execute(params![KEY_ADMIN, adm, now])?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Load the stored session; `None` when no (non-blank) token is present.
    pub fn load(&self) -> AppResult<Option<Session>> {
        let token = self.get(KEY_TOKEN)?;
        let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
            return Ok(None);
        };

        let user_id = self.get(KEY_USER_ID)?;
        let is_admin = self.get(KEY_ADMIN)?.as_deref() == Some("true");

        Ok(Some(Session {
            token,
            user_id,
            is_admin,
        }))
    }

    pub fn clear(&mut self) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM session_store", [])?;
        Ok(())
    }

    /// Raw access to a single key (mirrors browser `getItem`).
    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM session_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Raw write of a single key (mirrors browser `setItem`).
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO session_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

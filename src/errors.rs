//! Unified application error type.
//! All modules (api, db, backlog, forms, export, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local database (session store, log)
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Backend API
    // ---------------------------
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Invalid page size {0}: use 5, 10 or 25")]
    InvalidPageSize(usize),

    #[error("{0}")]
    Validation(#[from] crate::forms::FormErrors),

    // ---------------------------
    // Access
    // ---------------------------
    #[error("Access denied: redirected to {0}")]
    AccessDenied(String),

    #[error("Not logged in: redirected to / (run `rsurvey login`)")]
    NotLoggedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

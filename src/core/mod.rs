pub mod auth;
pub mod backlog;
pub mod config;
pub mod intake;
pub mod log;
pub mod survey;

pub mod auth;
pub mod backlog;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod open;
pub mod rate;
pub mod ticket;

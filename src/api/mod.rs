//! REST client for the survey backend.

mod client;
pub mod model;

pub use client::ApiClient;

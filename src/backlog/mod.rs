//! Administrator backlog: filter, paginate and export the ticket history.

mod filter;
mod paginate;
mod view;

pub use filter::{Filter, apply_filters};
pub use paginate::{Page, PageSize, Pager, page_count, paginate};
pub use view::{BacklogSource, BacklogView, ViewState};

/// Message rendered when the filtered set is empty (including after a
/// failed fetch).
pub const EMPTY_MESSAGE: &str = "No tickets found.";

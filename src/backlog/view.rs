use super::filter::{Filter, apply_filters};
use super::paginate::{Page, PageSize, Pager, page_count, paginate};
use crate::errors::AppResult;
use crate::models::{Ticket, User};
use tracing::{debug, warn};

/// Where the backlog data comes from. Implemented by the HTTP client and by
/// in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait BacklogSource {
    async fn fetch_tickets(&self) -> AppResult<Vec<Ticket>>;
    async fn fetch_users(&self) -> AppResult<Vec<User>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
}

/// Backlog working state: the fetched lists plus filter and pager.
///
/// `filtered` is always `apply_filters(tickets, filter)`; it is recomputed on
/// every change and never edited directly.
#[derive(Debug, Clone)]
pub struct BacklogView {
    state: ViewState,
    tickets: Vec<Ticket>,
    users: Vec<User>,
    filter: Filter,
    pager: Pager,
    filtered: Vec<Ticket>,
}

impl BacklogView {
    /// Empty view waiting for its data.
    pub fn new(size: PageSize) -> Self {
        Self {
            state: ViewState::Loading,
            tickets: Vec::new(),
            users: Vec::new(),
            filter: Filter::default(),
            pager: Pager::new(size),
            filtered: Vec::new(),
        }
    }

    /// Fetch tickets and users concurrently. Each fetch falls back to an
    /// empty list on failure, independently of the other.
    pub async fn load<S: BacklogSource>(source: &S, size: PageSize) -> Self {
        let (tickets, users) = tokio::join!(source.fetch_tickets(), source.fetch_users());

        let tickets = tickets.unwrap_or_else(|e| {
            warn!("error fetching services: {e}");
            Vec::new()
        });
        let users = users.unwrap_or_else(|e| {
            warn!("error fetching users: {e}");
            Vec::new()
        });

        debug!(tickets = tickets.len(), users = users.len(), "backlog loaded");

        let mut view = Self::new(size);
        view.set_data(tickets, users);
        view
    }

    /// Build a ready view from data already in memory.
    pub fn with_data(tickets: Vec<Ticket>, users: Vec<User>, size: PageSize) -> Self {
        let mut view = Self::new(size);
        view.set_data(tickets, users);
        view
    }

    fn set_data(&mut self, tickets: Vec<Ticket>, users: Vec<User>) {
        self.tickets = tickets;
        self.users = users;
        self.state = ViewState::Ready;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.tickets, &self.filter);
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    /// Replace the filter. The page goes back to the first one.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.pager.reset();
        self.recompute();
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.pager.set_size(size);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.filtered.len());
    }

    /// Whole filtered set, in server order. Exports read this, not the page.
    pub fn filtered(&self) -> &[Ticket] {
        &self.filtered
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len(), self.pager.size())
    }

    pub fn current_page(&self) -> Page<'_, Ticket> {
        Page {
            items: paginate(&self.filtered, self.pager.page(), self.pager.size()),
            number: self.pager.page(),
            count: self.page_count(),
            total: self.filtered.len(),
        }
    }

    /// Display name for a ticket's attendant: the embedded snapshot, else the
    /// matching entry of the user list.
    pub fn attendant_name(&self, ticket: &Ticket) -> Option<String> {
        ticket
            .attendant
            .as_ref()
            .map(|a| a.display_name())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                self.users
                    .iter()
                    .find(|u| u.id == ticket.id_attendant)
                    .map(User::display_name)
                    .filter(|n| !n.is_empty())
            })
    }
}

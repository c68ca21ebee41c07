use crate::backlog::{BacklogSource, BacklogView, EMPTY_MESSAGE, PageSize};
use crate::errors::AppResult;
use crate::guard::{RequiredRole, require};
use crate::models::Ticket;
use crate::session::Session;
use crate::utils::date::display_date;
use crate::utils::table::{Column, Table};

pub struct BacklogLogic;

impl BacklogLogic {
    /// Guard, then fetch tickets and users. Fetch failures yield empty lists.
    pub async fn open<S: BacklogSource>(
        source: &S,
        session: Option<&Session>,
        size: PageSize,
    ) -> AppResult<BacklogView> {
        require(session, RequiredRole::Backlog)?;
        Ok(BacklogView::load(source, size).await)
    }

    /// Current page as a table with a `Page x/y` footer, or the empty message.
    pub fn render_page(view: &BacklogView) -> String {
        let page = view.current_page();
        if page.items.is_empty() {
            return format!("{EMPTY_MESSAGE}\n");
        }

        let mut table = Table::new(vec![
            Column::new("ID", 8),
            Column::new("Type", 24),
            Column::new("Register", 20),
            Column::new("Date", 10),
            Column::new("Attendant", 24),
            Column::new("Rating", 48),
        ]);

        for t in page.items {
            table.add_row(vec![
                t.id.to_string(),
                t.kind.clone(),
                t.register.clone(),
                display_date(t.created_date()),
                view.attendant_name(t).unwrap_or_else(|| "-".to_string()),
                rating_summary(t),
            ]);
        }

        format!(
            "{}\nPage {}/{} ({} tickets)\n",
            table.render(),
            page.number,
            page.count,
            page.total
        )
    }

    /// Attendant list, to find the id for `--attendant`.
    pub fn render_users(view: &BacklogView) -> String {
        if view.users().is_empty() {
            return "No users found.\n".to_string();
        }

        let mut table = Table::new(vec![Column::new("ID", 8), Column::new("Name", 40)]);
        for u in view.users() {
            table.add_row(vec![u.id.to_string(), u.display_name()]);
        }
        table.render()
    }
}

/// Compact one-line rating: answers in question order.
fn rating_summary(t: &Ticket) -> String {
    match &t.rating {
        Some(r) if !r.questions.is_empty() => r
            .questions
            .iter()
            .map(|qa| qa.answer.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => "-".to_string(),
    }
}

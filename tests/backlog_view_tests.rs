mod common;

use common::{admin, attendant, sample_tickets, ticket, user, with_attendant};
use rsurvey::backlog::{BacklogSource, BacklogView, EMPTY_MESSAGE, PageSize, ViewState};
use rsurvey::core::backlog::BacklogLogic;
use rsurvey::errors::{AppError, AppResult};
use rsurvey::models::{Ticket, User};

/// In-memory backend; `None` makes the corresponding fetch fail.
struct FakeSource {
    tickets: Option<Vec<Ticket>>,
    users: Option<Vec<User>>,
}

impl BacklogSource for FakeSource {
    async fn fetch_tickets(&self) -> AppResult<Vec<Ticket>> {
        self.tickets.clone().ok_or(AppError::Status {
            endpoint: "/services".into(),
            status: 500,
        })
    }

    async fn fetch_users(&self) -> AppResult<Vec<User>> {
        self.users.clone().ok_or(AppError::Status {
            endpoint: "/users".into(),
            status: 500,
        })
    }
}

#[tokio::test]
async fn test_failed_fetches_render_empty_state() {
    let source = FakeSource {
        tickets: None,
        users: None,
    };
    let view = BacklogView::load(&source, PageSize::Ten).await;

    assert_eq!(view.state(), ViewState::Ready);
    assert!(view.tickets().is_empty());
    assert!(view.users().is_empty());
    assert_eq!(view.page_count(), 0);
    assert_eq!(BacklogLogic::render_page(&view), format!("{EMPTY_MESSAGE}\n"));
}

#[tokio::test]
async fn test_fetch_failures_are_independent() {
    let source = FakeSource {
        tickets: Some(sample_tickets()),
        users: None,
    };
    let view = BacklogView::load(&source, PageSize::Five).await;
    assert_eq!(view.tickets().len(), 12);
    assert!(view.users().is_empty());

    let source = FakeSource {
        tickets: None,
        users: Some(vec![user(1, "Ana", "Souza")]),
    };
    let view = BacklogView::load(&source, PageSize::Five).await;
    assert!(view.tickets().is_empty());
    assert_eq!(view.users().len(), 1);
}

#[tokio::test]
async fn test_open_is_guarded_for_administrators() {
    let source = FakeSource {
        tickets: Some(sample_tickets()),
        users: Some(vec![]),
    };

    let err = BacklogLogic::open(&source, Some(&attendant()), PageSize::Ten)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AccessDenied(ref p) if p == "/home"));

    let err = BacklogLogic::open(&source, None, PageSize::Ten)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotLoggedIn));

    let view = BacklogLogic::open(&source, Some(&admin()), PageSize::Ten)
        .await
        .unwrap();
    assert_eq!(view.page_count(), 2);
}

#[test]
fn test_render_page_shows_footer_and_names() {
    let tickets = vec![
        with_attendant(ticket(1, "2024-02-01T09:00:00Z", 1), "Ana", "Souza"),
        ticket(2, "2024-02-02T09:00:00Z", 2),
        ticket(3, "2024-02-03T09:00:00Z", 3),
    ];
    let users = vec![user(2, "Bruno", "Lima")];
    let view = BacklogView::with_data(tickets, users, PageSize::Five);

    let out = BacklogLogic::render_page(&view);
    assert!(out.contains("Ana Souza"));
    assert!(out.contains("Bruno Lima"), "falls back to the user list");
    assert!(out.contains("01/02/2024"));
    assert!(out.contains("Page 1/1 (3 tickets)"));
}

#[test]
fn test_render_users_lists_ids() {
    let view = BacklogView::with_data(vec![], vec![user(4, "Carla", "Dias")], PageSize::Ten);
    let out = BacklogLogic::render_users(&view);
    assert!(out.contains("Carla Dias"));
    assert!(out.contains('4'));
}

//! End-to-end circulation flows driven through the App with a mock
//! transport: issue twice against a shrinking shelf, overdue display, and
//! return with fine.

use libris::adapters::mock::MockHttpClient;
use libris::api::LibraryClient;
use libris::app::{App, AppMessage};
use libris::models::DisplayStatus;
use libris::store::LoadState;
use tokio::sync::mpsc::UnboundedReceiver;

const BASE: &str = "http://api";

fn books_body(available: u32) -> String {
    format!(
        r#"[{{"id":"b1","title":"Dune","author":"Frank Herbert","isbn":"978-0441172719",
            "category":"SciFi","total_copies":3,"available_copies":{},"issued_copies":{}}}]"#,
        available,
        3 - available
    )
}

const MEMBERS_BODY: &str = r#"[{"id":"m1","name":"Ann Lee","email":"ann@example.com",
    "phone":"555-0100","joined_date":"2026-01-01"}]"#;

const STATS_BODY: &str =
    r#"{"total_books":1,"total_members":1,"books_issued":0,"overdue_books":0}"#;

const ISSUE_BODY: &str = r#"{"id":"t1","book_id":"b1","member_id":"m1",
    "issue_date":"2026-08-20T10:00:00","due_date":"2026-08-27T10:00:00",
    "return_date":null,"fine":0.0,"status":"issued"}"#;

fn setup(available: u32, transactions: &str) -> (App<MockHttpClient>, MockHttpClient) {
    let mock = MockHttpClient::new();
    mock.set_json_response(&format!("{}/books", BASE), 200, &books_body(available));
    mock.set_json_response(&format!("{}/members", BASE), 200, MEMBERS_BODY);
    mock.set_json_response(&format!("{}/transactions/", BASE), 200, transactions);
    mock.set_json_response(&format!("{}/dashboard/stats", BASE), 200, STATS_BODY);
    let app = App::new(LibraryClient::with_http(BASE, mock.clone()));
    (app, mock)
}

/// Receive and apply `n` messages from spawned tasks.
async fn pump(app: &mut App<MockHttpClient>, rx: &mut UnboundedReceiver<AppMessage>, n: usize) {
    for _ in 0..n {
        let message = rx.recv().await.expect("task dropped its sender");
        app.handle_message(message);
    }
}

#[tokio::test]
async fn test_issue_twice_decrements_availability() {
    let (mut app, mock) = setup(3, "[]");
    let mut rx = app.message_rx.take().unwrap();
    mock.set_json_response(&format!("{}/transactions/issue", BASE), 200, ISSUE_BODY);

    // Initial load: books, members, loans
    app.refresh_circulation();
    pump(&mut app, &mut rx, 3).await;
    assert_eq!(app.books.items()[0].available_copies, 3);

    // First issue: the backend now reports one fewer copy
    mock.set_json_response(&format!("{}/books", BASE), 200, &books_body(2));
    app.issue_selected();
    pump(&mut app, &mut rx, 1).await; // ActionFinished triggers refresh_all
    pump(&mut app, &mut rx, 4).await; // stats + books + members + loans
    assert_eq!(app.books.items()[0].available_copies, 2);
    assert!(app.notice.as_ref().is_some_and(|n| !n.is_error));

    // Second issue
    mock.set_json_response(&format!("{}/books", BASE), 200, &books_body(1));
    app.issue_selected();
    pump(&mut app, &mut rx, 1).await;
    pump(&mut app, &mut rx, 4).await;
    assert_eq!(app.books.items()[0].available_copies, 1);

    let issues = mock
        .requests()
        .iter()
        .filter(|r| r.url.ends_with("/transactions/issue"))
        .count();
    assert_eq!(issues, 2);
}

#[tokio::test]
async fn test_issue_failure_surfaces_notice_without_reload() {
    let (mut app, mock) = setup(3, "[]");
    let mut rx = app.message_rx.take().unwrap();
    mock.set_json_response(
        &format!("{}/transactions/issue", BASE),
        400,
        r#"{"detail": "Book is not available"}"#,
    );

    app.refresh_circulation();
    pump(&mut app, &mut rx, 3).await;

    app.issue_selected();
    pump(&mut app, &mut rx, 1).await;

    let notice = app.notice.as_ref().unwrap();
    assert!(notice.is_error);
    assert_eq!(notice.text, "Book is not available");
    // A failed mutation does not trigger a reload
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_overdue_loan_displays_and_returns_with_fine() {
    let issued_overdue = r#"[{"id":"t1","book_id":"b1","member_id":"m1",
        "issue_date":"2026-08-01T09:00:00","due_date":"2026-08-08T09:00:00",
        "return_date":null,"fine":0.0,"status":"issued"}]"#;
    let (mut app, mock) = setup(2, issued_overdue);
    let mut rx = app.message_rx.take().unwrap();

    app.refresh_circulation();
    pump(&mut app, &mut rx, 3).await;

    // Due date long past, still issued: derived state is overdue and the
    // offered action changes
    let loan = app.loans.selected_item().unwrap();
    assert_eq!(loan.display, DisplayStatus::Overdue);
    assert_eq!(loan.display.action_label(), Some("Return & Pay"));

    mock.set_json_response(
        &format!("{}/transactions/return/t1", BASE),
        200,
        r#"{"id":"t1","book_id":"b1","member_id":"m1",
            "issue_date":"2026-08-01T09:00:00","due_date":"2026-08-08T09:00:00",
            "return_date":"2026-08-12T17:30:00","fine":20.0,"status":"returned"}"#,
    );

    app.return_selected();
    pump(&mut app, &mut rx, 1).await;

    let notice = app.notice.as_ref().unwrap();
    assert!(!notice.is_error);
    assert!(notice.text.contains("fine $20.00"), "got: {}", notice.text);
}

#[tokio::test]
async fn test_returned_loan_is_never_overdue_and_not_returnable() {
    let returned = r#"[{"id":"t1","book_id":"b1","member_id":"m1",
        "issue_date":"2020-01-01T09:00:00","due_date":"2020-01-08T09:00:00",
        "return_date":"2020-01-05T09:00:00","fine":0.0,"status":"returned"}]"#;
    let (mut app, mock) = setup(3, returned);
    let mut rx = app.message_rx.take().unwrap();

    app.refresh_circulation();
    pump(&mut app, &mut rx, 3).await;

    let loan = app.loans.selected_item().unwrap();
    assert_eq!(loan.display, DisplayStatus::Returned);
    assert_eq!(loan.display.action_label(), None);

    // Return on an already-returned row is a no-op: no request leaves
    let before = mock.requests().len();
    app.return_selected();
    assert_eq!(mock.requests().len(), before);
}

#[tokio::test]
async fn test_failed_circulation_load_keeps_previous_rows() {
    let issued = r#"[{"id":"t1","book_id":"b1","member_id":"m1",
        "issue_date":"2026-08-01T09:00:00","due_date":"2026-09-08T09:00:00",
        "return_date":null,"fine":0.0,"status":"issued"}]"#;
    let (mut app, mock) = setup(2, issued);
    let mut rx = app.message_rx.take().unwrap();

    app.refresh_circulation();
    pump(&mut app, &mut rx, 3).await;
    assert_eq!(app.loans.items().len(), 1);

    // Backend starts failing; the rows already on screen stay
    mock.set_json_response(
        &format!("{}/transactions/", BASE),
        500,
        r#"{"detail": "boom"}"#,
    );
    app.refresh_circulation();
    pump(&mut app, &mut rx, 3).await;

    assert_eq!(app.loans.state(), LoadState::Failed);
    assert_eq!(app.loans.items().len(), 1);
    assert!(app.notice.as_ref().is_some_and(|n| n.is_error));
}

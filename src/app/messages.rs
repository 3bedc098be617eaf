//! AppMessage enum for async communication within the application.

use crate::app::loans::LoanView;
use crate::models::{Book, DashboardStats, Member};

/// Messages received from spawned API calls.
///
/// List loads carry the request token handed out by the store so stale
/// responses can be discarded on receipt.
#[derive(Debug)]
pub enum AppMessage {
    /// Book list load finished
    BooksLoaded {
        token: u64,
        result: Result<Vec<Book>, String>,
    },
    /// Member list load finished
    MembersLoaded {
        token: u64,
        result: Result<Vec<Member>, String>,
    },
    /// Circulation load finished: transactions joined with book titles and
    /// member names
    LoansLoaded {
        token: u64,
        result: Result<Vec<LoanView>, String>,
    },
    /// Dashboard stats load finished
    StatsLoaded(Result<DashboardStats, String>),
    /// A mutation (create/delete/issue/return) completed.
    ///
    /// Ok carries a confirmation for the notice line and triggers a reload
    /// of the affected lists; Err carries the user-facing failure message.
    /// `reset_form` names the page whose create form should reset and hide
    /// on success; failed submissions keep their values.
    ActionFinished {
        result: Result<String, String>,
        reset_form: Option<crate::app::Page>,
    },
}

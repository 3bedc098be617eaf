//! Dashboard statistics model.

use serde::{Deserialize, Serialize};

/// Aggregate counts from `GET /dashboard/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(alias = "totalBooks")]
    pub total_books: u32,
    #[serde(alias = "totalMembers")]
    pub total_members: u32,
    /// Loans currently out (status `issued`).
    #[serde(alias = "booksIssued")]
    pub books_issued: u32,
    /// Issued loans past their due date, counted server-side.
    #[serde(alias = "overdueBooks")]
    pub overdue_books: u32,
}

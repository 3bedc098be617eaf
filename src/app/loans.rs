//! Circulation rows: transactions joined with their book and member.
//!
//! The backend returns transactions with bare ids. The join against the
//! book and member lists happens client-side at load time, along with the
//! derived display status, so search and filtering can work over the
//! joined names.

use chrono::NaiveDateTime;

use crate::models::{display_status, Book, DisplayStatus, Member, Transaction};
use crate::store::Searchable;

/// A transaction enriched for display.
#[derive(Debug, Clone)]
pub struct LoanView {
    pub transaction: Transaction,
    /// Joined book title, or a placeholder when the book was deleted
    pub book_title: String,
    /// Joined member name, or a placeholder when the member was deleted
    pub member_name: String,
    /// Display status derived at load time
    pub display: DisplayStatus,
}

impl LoanView {
    /// Join transactions against the fetched book and member lists.
    ///
    /// Dangling references render as `book <id>` / `member <id>` rather
    /// than dropping the row; loan history outlives catalog entries.
    pub fn join(
        transactions: Vec<Transaction>,
        books: &[Book],
        members: &[Member],
        now: NaiveDateTime,
    ) -> Vec<LoanView> {
        transactions
            .into_iter()
            .map(|transaction| {
                let book_title = books
                    .iter()
                    .find(|b| b.id == transaction.book_id)
                    .map(|b| b.title.clone())
                    .unwrap_or_else(|| format!("book {}", transaction.book_id));
                let member_name = members
                    .iter()
                    .find(|m| m.id == transaction.member_id)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| format!("member {}", transaction.member_id));
                let display = display_status(transaction.status, transaction.due_date, now);
                LoanView {
                    transaction,
                    book_title,
                    member_name,
                    display,
                }
            })
            .collect()
    }
}

impl Searchable for LoanView {
    /// Loans match on the joined book title or member name.
    fn matches_search(&self, needle: &str) -> bool {
        self.book_title.to_lowercase().contains(needle)
            || self.member_name.to_lowercase().contains(needle)
    }

    /// Loans filter by display status: issued, returned, or overdue.
    fn matches_filter(&self, filter: &str) -> bool {
        self.display.label().to_lowercase() == filter
    }
}

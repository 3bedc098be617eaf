//! Loan transaction models and derived status computation.
//!
//! The backend stores only `issued` and `returned`. "Overdue" is a display
//! state derived from the due date; it is computed in exactly one place
//! ([`display_status`]) so every view agrees, and it never feeds back into
//! stored data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Persisted status of a loan, as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Issued,
    Returned,
}

/// Display status of a loan: the persisted status plus the derived
/// overdue state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStatus {
    Issued,
    Returned,
    Overdue,
}

impl DisplayStatus {
    /// Uppercase label for table rendering.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Issued => "ISSUED",
            DisplayStatus::Returned => "RETURNED",
            DisplayStatus::Overdue => "OVERDUE",
        }
    }

    /// Action label offered for this row, if any.
    ///
    /// Overdue loans return with a fine, so the action is relabelled.
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            DisplayStatus::Issued => Some("Return"),
            DisplayStatus::Overdue => Some("Return & Pay"),
            DisplayStatus::Returned => None,
        }
    }
}

/// Compute the display status for a loan.
///
/// A loan is overdue when it is still issued and `now` is past the due date.
/// Returned loans are never overdue, regardless of the due date.
pub fn display_status(
    status: TransactionStatus,
    due_date: NaiveDateTime,
    now: NaiveDateTime,
) -> DisplayStatus {
    match status {
        TransactionStatus::Returned => DisplayStatus::Returned,
        TransactionStatus::Issued if now > due_date => DisplayStatus::Overdue,
        TransactionStatus::Issued => DisplayStatus::Issued,
    }
}

/// A loan record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub book_id: String,
    pub member_id: String,
    pub issue_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub return_date: Option<NaiveDateTime>,
    /// Monetary penalty computed server-side on late return.
    #[serde(default)]
    pub fine: f64,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Display status of this loan at the given instant.
    pub fn display_status(&self, now: NaiveDateTime) -> DisplayStatus {
        display_status(self.status, self.due_date, now)
    }

    /// Whether a return action is offered for this loan.
    pub fn is_returnable(&self) -> bool {
        self.status == TransactionStatus::Issued
    }
}

/// Payload for issuing a book via `POST /transactions/issue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRequest {
    pub book_id: String,
    pub member_id: String,
}

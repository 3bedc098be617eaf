//! Data models mirroring the backend's JSON wire format.
//!
//! Snake_case is the canonical field naming; known camelCase variants are
//! accepted on decode and normalized at this boundary.

pub mod book;
pub mod member;
pub mod stats;
pub mod transaction;

pub use book::{Book, NewBook};
pub use member::{Member, NewMember};
pub use stats::DashboardStats;
pub use transaction::{
    display_status, DisplayStatus, IssueRequest, Transaction, TransactionStatus,
};

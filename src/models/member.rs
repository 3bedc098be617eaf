//! Library member models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_tier() -> String {
    "standard".to_string()
}

fn default_active() -> bool {
    true
}

/// A registered member as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(alias = "joinedDate")]
    pub joined_date: NaiveDate,
    /// Membership tier; backends that predate tiers omit it.
    #[serde(default = "default_tier")]
    pub tier: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Payload for creating a member via `POST /members/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
}

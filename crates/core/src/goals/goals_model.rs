//! Goals domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing a member's dated goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub member_id: String,
    pub description: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    /// Target day as `YYYY-MM-DD`. Kept as text; only its shape is checked.
    pub date: String,
}

/// Input model for creating a new goal.
///
/// Ids and creation time are assigned by the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub member_id: String,
    pub description: String,
    pub date: String,
}

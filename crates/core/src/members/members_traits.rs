use crate::errors::Result;
use crate::members::members_model::{Member, MemberGoalRow, MoodUpdate, MoodUpdateOutcome};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Trait for member repository operations
#[async_trait]
pub trait MemberRepositoryTrait: Send + Sync {
    /// Members LEFT JOIN goals, ordered by member name, then goal date
    /// descending, then goal creation time descending.
    fn list_members_with_goals(&self) -> Result<Vec<MemberGoalRow>>;

    fn member_exists(&self, member_id: &str) -> Result<bool>;

    /// Reads the stored mood timestamp, resolves it against `update` with
    /// `resolve_mood_update` and writes mood and timestamp together when
    /// applied, all as one atomic step for that member.
    ///
    /// Returns `None` when the member does not exist.
    async fn update_mood_if_newer(&self, update: MoodUpdate)
        -> Result<Option<MoodUpdateOutcome>>;
}

/// Trait for member service operations
#[async_trait]
pub trait MemberServiceTrait: Send + Sync {
    fn get_members(&self) -> Result<Vec<Member>>;
    async fn update_mood(
        &self,
        member_id: &str,
        mood: &str,
        timestamp: NaiveDateTime,
    ) -> Result<MoodUpdateOutcome>;
}

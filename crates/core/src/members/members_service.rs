use log::debug;
use std::sync::Arc;

use super::member_aggregation::aggregate_members;
use super::members_model::{Member, Mood, MoodUpdate, MoodUpdateOutcome};
use super::members_traits::{MemberRepositoryTrait, MemberServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Service for listing members and recording their mood
pub struct MemberService {
    repository: Arc<dyn MemberRepositoryTrait>,
}

impl MemberService {
    pub fn new(repository: Arc<dyn MemberRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MemberServiceTrait for MemberService {
    /// Lists every member with their goals nested, in store order
    fn get_members(&self) -> Result<Vec<Member>> {
        let rows = self.repository.list_members_with_goals()?;
        Ok(aggregate_members(rows).into_members())
    }

    /// Records a mood under last-write-wins.
    ///
    /// A stale timestamp is absorbed and still reported as success.
    async fn update_mood(
        &self,
        member_id: &str,
        mood: &str,
        timestamp: NaiveDateTime,
    ) -> Result<MoodUpdateOutcome> {
        let mood: Mood = mood
            .parse()
            .map_err(|msg: String| Error::Validation(ValidationError::InvalidInput(msg)))?;

        let update = MoodUpdate {
            member_id: member_id.to_string(),
            mood,
            timestamp,
        };
        let outcome = self
            .repository
            .update_mood_if_newer(update)
            .await?
            .ok_or_else(|| Error::member_not_found(member_id))?;

        if outcome == MoodUpdateOutcome::Stale {
            debug!(
                "Ignoring stale mood update for member {} at {}",
                member_id, timestamp
            );
        }
        Ok(outcome)
    }
}

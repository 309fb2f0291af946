use log::debug;
use std::sync::Arc;

use super::goals_model::{Goal, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use super::goals_validation::validate_goal_fields;
use crate::errors::{Error, Result};
use crate::members::MemberRepositoryTrait;
use async_trait::async_trait;

/// Service for the goal lifecycle: create, toggle completion, delete
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    member_repo: Arc<dyn MemberRepositoryTrait>,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        member_repo: Arc<dyn MemberRepositoryTrait>,
    ) -> Self {
        GoalService {
            goal_repo,
            member_repo,
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    /// Validates description, date and owner (in that order) before inserting
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        validate_goal_fields(&new_goal.description, &new_goal.date)?;

        if !self.member_repo.member_exists(&new_goal.member_id)? {
            return Err(Error::member_not_found(&new_goal.member_id));
        }

        let goal = self.goal_repo.insert_new_goal(new_goal).await?;
        debug!("Created goal {} for member {}", goal.id, goal.member_id);
        Ok(goal)
    }

    async fn set_goal_completion(&self, goal_id: &str, completed: bool) -> Result<()> {
        if !self
            .goal_repo
            .update_goal_completion(goal_id, completed)
            .await?
        {
            return Err(Error::goal_not_found(goal_id));
        }
        Ok(())
    }

    /// Deleting an id twice reports `NotFound` the second time
    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        if !self.goal_repo.delete_goal(goal_id).await? {
            return Err(Error::goal_not_found(goal_id));
        }
        debug!("Deleted goal {}", goal_id);
        Ok(())
    }
}

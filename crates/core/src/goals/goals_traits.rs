use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Inserts a goal with a fresh id, server-side creation time and `completed = false`.
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Returns `false` when no goal has this id.
    async fn update_goal_completion(&self, goal_id: &str, completed: bool) -> Result<bool>;
    /// Returns `false` when no goal has this id.
    async fn delete_goal(&self, goal_id: &str) -> Result<bool>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn set_goal_completion(&self, goal_id: &str, completed: bool) -> Result<()>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
}

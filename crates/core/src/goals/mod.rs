//! Goals module - domain models, validation, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;
mod goals_validation;


pub use goals_model::{Goal, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
pub use goals_validation::validate_goal_fields;

//! Members module - domain models, join aggregation, mood conflict resolution, services, and traits.

mod member_aggregation;
mod members_model;
mod members_service;
mod members_traits;
mod mood_resolver;


pub use member_aggregation::{aggregate_members, MembersById};
pub use members_model::{Member, MemberGoalRow, MemberProfile, Mood, MoodUpdate, MoodUpdateOutcome};
pub use members_service::MemberService;
pub use members_traits::{MemberRepositoryTrait, MemberServiceTrait};
pub use mood_resolver::resolve_mood_update;

//! SQLite storage implementation for team members.

mod model;
mod repository;

pub use model::TeamMemberDB;
pub use repository::MemberRepository;

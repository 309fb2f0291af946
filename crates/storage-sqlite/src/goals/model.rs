//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::members::TeamMemberDB;
use vibeloop_core::goals::Goal;

/// Database model for goals
#[derive(
    Insertable,
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Debug,
    Clone,
)]
#[diesel(belongs_to(TeamMemberDB, foreign_key = member_id))]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub member_id: String,
    pub description: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub date: String,
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            member_id: db.member_id,
            description: db.description,
            completed: db.completed,
            created_at: db.created_at,
            date: db.date,
        }
    }
}

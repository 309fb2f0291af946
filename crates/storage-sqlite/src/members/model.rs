//! Database model for team members.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::errors::StorageError;
use vibeloop_core::members::{MemberProfile, Mood};

/// Database model for team members
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::team_members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TeamMemberDB {
    pub id: String,
    pub name: String,
    pub mood: Option<String>,
    pub mood_updated_at: Option<NaiveDateTime>,
}

impl TryFrom<TeamMemberDB> for MemberProfile {
    type Error = StorageError;

    fn try_from(db: TeamMemberDB) -> Result<Self, Self::Error> {
        let mood = db
            .mood
            .as_deref()
            .map(str::parse::<Mood>)
            .transpose()
            .map_err(|e| StorageError::Decode(format!("member {}: {}", db.id, e)))?;

        Ok(Self {
            id: db.id,
            name: db.name,
            mood,
            mood_updated_at: db.mood_updated_at,
        })
    }
}

//! Member domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::goals::Goal;

/// Self-reported mood of a team member.
///
/// Parsing is case-insensitive; the stored and serialized form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    Low,
    Stressed,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Neutral,
        Mood::Low,
        Mood::Stressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Low => "low",
            Mood::Stressed => "stressed",
        }
    }

    /// Comma separated list of accepted values, used in error messages.
    pub fn valid_values() -> String {
        Mood::ALL
            .iter()
            .map(Mood::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == lowered)
            .ok_or_else(|| format!("Mood must be one of: {}", Mood::valid_values()))
    }
}

/// Flat member projection as read from the store, without goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub id: String,
    pub name: String,
    pub mood: Option<Mood>,
    pub mood_updated_at: Option<NaiveDateTime>,
}

/// A member together with every goal they own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub mood: Option<Mood>,
    pub mood_updated_at: Option<NaiveDateTime>,
    pub goals: Vec<Goal>,
}

impl From<MemberProfile> for Member {
    fn from(profile: MemberProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            mood: profile.mood,
            mood_updated_at: profile.mood_updated_at,
            goals: Vec::new(),
        }
    }
}

/// One row of the members LEFT JOIN goals listing.
///
/// `goal` is `None` for a member without goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberGoalRow {
    pub member: MemberProfile,
    pub goal: Option<Goal>,
}

/// A proposed mood change stamped with the client's event time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodUpdate {
    pub member_id: String,
    pub mood: Mood,
    /// UTC
    pub timestamp: NaiveDateTime,
}

/// Result of a mood update that reached an existing member.
///
/// Both variants are a success for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodUpdateOutcome {
    Applied,
    /// The stored timestamp was equal or newer; nothing was written.
    Stale,
}

//! Request and response shapes of the HTTP API.
//!
//! Request fields are optional so that missing or blank values can be
//! reported as `INVALID_REQUEST` before anything reaches the core.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vibeloop_core::goals::Goal;
use vibeloop_core::members::Member;

use crate::error::ApiError;

/// Returns the trimmed-non-empty value of a request field, or the
/// `"<Field> is required"` error.
pub fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::required(field)),
    }
}

const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Accepts RFC 3339 (any offset, normalized to UTC), a naive ISO-8601
/// date-time with or without seconds, or a bare date (midnight). Naive
/// values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ApiError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc).naive_utc());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            ApiError::InvalidRequest("Timestamp must be an ISO-8601 date-time".to_string())
        })
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMoodRequest {
    pub member_id: Option<String>,
    pub mood: Option<String>,
    #[schema(example = "2024-06-01T09:30:00Z")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub member_id: Option<String>,
    pub description: Option<String>,
    #[schema(example = "2024-06-01")]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    pub goal_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGoalRequest {
    pub goal_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: String,
    pub member_id: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub date: String,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id,
            member_id: goal.member_id,
            description: goal.description,
            completed: goal.completed,
            created_at: goal.created_at.and_utc(),
            date: goal.date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    #[schema(example = "great")]
    pub mood: Option<String>,
    pub mood_updated_at: Option<DateTime<Utc>>,
    pub goals: Vec<GoalResponse>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            mood: member.mood.map(|m| m.as_str().to_string()),
            mood_updated_at: member.mood_updated_at.map(|t| t.and_utc()),
            goals: member.goals.into_iter().map(GoalResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalResponse {
    pub success: bool,
    pub goal_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

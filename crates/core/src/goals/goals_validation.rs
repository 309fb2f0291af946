//! Input checks applied to a goal before it reaches the store.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{GOAL_DATE_PATTERN, GOAL_DESCRIPTION_MAX_LEN, GOAL_DESCRIPTION_MIN_LEN};
use crate::errors::{Result, ValidationError};

static GOAL_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GOAL_DATE_PATTERN).expect("goal date pattern is valid"));

/// Checks description length, then the date shape. The first failure wins.
///
/// Member existence is the third check and needs the store, so it lives in
/// `GoalService::create_goal`.
pub fn validate_goal_fields(description: &str, date: &str) -> Result<()> {
    let len = description.chars().count();
    if !(GOAL_DESCRIPTION_MIN_LEN..=GOAL_DESCRIPTION_MAX_LEN).contains(&len) {
        return Err(ValidationError::InvalidInput(format!(
            "Goal description must be between {} and {} characters",
            GOAL_DESCRIPTION_MIN_LEN, GOAL_DESCRIPTION_MAX_LEN
        ))
        .into());
    }

    if !GOAL_DATE_RE.is_match(date) {
        return Err(ValidationError::InvalidInput(
            "Date must be in YYYY-MM-DD format".to_string(),
        )
        .into());
    }

    Ok(())
}

/// Inclusive bounds for a goal description, counted in characters.
pub const GOAL_DESCRIPTION_MIN_LEN: usize = 3;
pub const GOAL_DESCRIPTION_MAX_LEN: usize = 200;

/// Lexical shape of a goal target date. No calendar check is applied.
pub const GOAL_DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

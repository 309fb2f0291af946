//! Last-write-wins policy for mood updates.

use chrono::NaiveDateTime;

use super::members_model::MoodUpdateOutcome;

/// Decides whether a proposed mood timestamp should replace the stored one.
///
/// A member that never had a mood (`current` is `None`) accepts any proposal.
/// Otherwise the proposal must be strictly newer; an equal timestamp is stale,
/// which makes redelivery of the same event a no-op.
///
/// Callers must run this and the following write atomically per member.
pub fn resolve_mood_update(
    current: Option<NaiveDateTime>,
    proposed: NaiveDateTime,
) -> MoodUpdateOutcome {
    match current {
        Some(stored) if proposed <= stored => MoodUpdateOutcome::Stale,
        _ => MoodUpdateOutcome::Applied,
    }
}

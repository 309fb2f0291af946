use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{parse_timestamp, required, MemberResponse, SuccessResponse, UpdateMoodRequest},
};

#[utoipa::path(
    get,
    path = "/api/members",
    responses((status = 200, body = [MemberResponse]))
)]
pub async fn get_members(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MemberResponse>>> {
    let members = state.member_service.get_members()?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// A stale update (timestamp not newer than the stored one) still answers
/// `success: true`; the stored mood is left untouched.
#[utoipa::path(
    post,
    path = "/api/members/mood",
    request_body = UpdateMoodRequest,
    responses(
        (status = 200, body = SuccessResponse),
        (status = 400, body = crate::models::ErrorBody),
        (status = 404, body = crate::models::ErrorBody)
    )
)]
pub async fn update_mood(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateMoodRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Json(req) = payload?;
    let member_id = required(&req.member_id, "MemberId")?;
    let mood = required(&req.mood, "Mood")?;
    let timestamp = parse_timestamp(required(&req.timestamp, "Timestamp")?)?;

    let outcome = state
        .member_service
        .update_mood(member_id, mood, timestamp)
        .await?;
    tracing::debug!(member_id, ?outcome, "mood update resolved");
    Ok(Json(SuccessResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", get(get_members))
        .route("/members/mood", post(update_mood))
}

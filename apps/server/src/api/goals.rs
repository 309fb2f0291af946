use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use vibeloop_core::goals::NewGoal;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{
        required, CreateGoalRequest, CreateGoalResponse, DeleteGoalRequest, SuccessResponse,
        UpdateGoalRequest,
    },
};

#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalRequest,
    responses(
        (status = 200, body = CreateGoalResponse),
        (status = 400, body = crate::models::ErrorBody),
        (status = 404, body = crate::models::ErrorBody)
    )
)]
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateGoalRequest>, JsonRejection>,
) -> ApiResult<Json<CreateGoalResponse>> {
    let Json(req) = payload?;
    let new_goal = NewGoal {
        member_id: required(&req.member_id, "MemberId")?.to_string(),
        description: required(&req.description, "Description")?.to_string(),
        date: required(&req.date, "Date")?.to_string(),
    };
    let goal = state.goal_service.create_goal(new_goal).await?;
    Ok(Json(CreateGoalResponse {
        success: true,
        goal_id: goal.id,
    }))
}

#[utoipa::path(
    post,
    path = "/api/goals/update",
    request_body = UpdateGoalRequest,
    responses(
        (status = 200, body = SuccessResponse),
        (status = 404, body = crate::models::ErrorBody)
    )
)]
pub async fn update_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateGoalRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Json(req) = payload?;
    let goal_id = required(&req.goal_id, "GoalId")?;
    state
        .goal_service
        .set_goal_completion(goal_id, req.completed)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

#[utoipa::path(
    post,
    path = "/api/goals/delete",
    request_body = DeleteGoalRequest,
    responses(
        (status = 200, body = SuccessResponse),
        (status = 404, body = crate::models::ErrorBody)
    )
)]
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DeleteGoalRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Json(req) = payload?;
    let goal_id = required(&req.goal_id, "GoalId")?;
    state.goal_service.delete_goal(goal_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", post(create_goal))
        .route("/goals/update", post(update_goal))
        .route("/goals/delete", post(delete_goal))
}

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use nutriplan_planner::{AddEntryInput, DailyPlan, PlanSummary};

use super::{ApiJson, AppState};
use crate::{
    error::{AppError, AppResult},
    middleware::Auth,
};

#[tracing::instrument(skip(state))]
pub async fn today(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> AppResult<Json<DailyPlan>> {
    let plan = state
        .planner_command
        .today(&auth.user_id, nutriplan_shared::today())
        .await?;

    Ok(Json(plan))
}

#[tracing::instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> AppResult<Json<PlanSummary>> {
    let Some(user) = state.user_query.find(&auth.user_id).await? else {
        return Err(AppError::Unauthorized("User not authenticated.".to_owned()));
    };

    let plan = state
        .planner_command
        .today(&auth.user_id, nutriplan_shared::today())
        .await?;

    Ok(Json(nutriplan_planner::summarize(
        &plan.entries,
        user.calorie_goal,
    )))
}

#[tracing::instrument(skip(state, input))]
pub async fn add_entry(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    ApiJson(input): ApiJson<AddEntryInput>,
) -> AppResult<impl IntoResponse> {
    let entry = state.planner_command.add_entry(&auth.user_id, input).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

#[tracing::instrument(skip(state))]
pub async fn remove_entry(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .planner_command
        .remove_entry(&auth.user_id, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Extension, Json,
    extract::State,
};
use nutriplan_planner::CalorieDay;
use nutriplan_recipe::Recipe;
use nutriplan_user::{UpdateProfileInput, User};
use serde::Deserialize;

use super::{ApiJson, ApiQuery, AppState};
use crate::{
    error::{AppError, AppResult},
    middleware::Auth,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PantryInput {
    pub pantry: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecommendedParams {
    pub count: Option<i64>,
}

async fn current_user(state: &AppState, auth: &Auth) -> AppResult<User> {
    state
        .user_query
        .find(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not authenticated.".to_owned()))
}

#[tracing::instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> AppResult<Json<User>> {
    Ok(Json(current_user(&state, &auth).await?))
}

#[tracing::instrument(skip(state, input))]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    ApiJson(input): ApiJson<UpdateProfileInput>,
) -> AppResult<Json<User>> {
    let user = state
        .user_command
        .update_profile(auth.user_id, input)
        .await?;

    Ok(Json(user))
}

#[tracing::instrument(skip(state, input))]
pub async fn update_pantry(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    ApiJson(input): ApiJson<PantryInput>,
) -> AppResult<Json<User>> {
    let user = state
        .user_command
        .update_pantry(auth.user_id, input.pantry)
        .await?;

    Ok(Json(user))
}

#[tracing::instrument(skip(state))]
pub async fn calorie_history(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> AppResult<Json<Vec<CalorieDay>>> {
    let since = nutriplan_shared::days_before(
        nutriplan_shared::today(),
        state.config.planner.history_days,
    );
    let history = state
        .planner_query
        .calorie_history(&auth.user_id, since)
        .await?;

    Ok(Json(history))
}

#[tracing::instrument(skip(state))]
pub async fn full_calorie_history(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> AppResult<Json<Vec<CalorieDay>>> {
    let history = state
        .planner_query
        .full_calorie_history(&auth.user_id)
        .await?;

    Ok(Json(history))
}

#[tracing::instrument(skip(state))]
pub async fn recommended_recipes(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    ApiQuery(params): ApiQuery<RecommendedParams>,
) -> AppResult<Json<Vec<Recipe>>> {
    let user = current_user(&state, &auth).await?;
    let max = i64::from(nutriplan_recipe::MAX_RECOMMENDED);
    let count = params
        .count
        .map(|count| count.clamp(1, max) as u16)
        .unwrap_or(state.config.planner.recommended_default);
    let recipes = state
        .recipe_query
        .recommended(&user.pantry, count)
        .await?;

    Ok(Json(recipes))
}

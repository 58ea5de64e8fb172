use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use nutriplan_user::{LoginInput, RegisterInput, User};

use super::{ApiJson, AppState};
use crate::error::AppResult;

#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterInput>,
) -> AppResult<impl IntoResponse> {
    let user = state.user_command.register(input).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginInput>,
) -> AppResult<Json<User>> {
    let user = state.user_command.login(input).await?;

    Ok(Json(user))
}

use axum::{
    Json,
    extract::{Path, State},
};
use nutriplan_recipe::Recipe;
use serde::Deserialize;

use super::{ApiQuery, AppState};
use crate::error::AppResult;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub ingredient: String,
}

#[tracing::instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Recipe>>> {
    Ok(Json(state.recipe_query.list().await?))
}

#[tracing::instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> AppResult<Json<Vec<Recipe>>> {
    let recipes = state
        .recipe_query
        .search_by_ingredient(&params.ingredient)
        .await?;

    Ok(Json(recipes))
}

#[tracing::instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Recipe>> {
    Ok(Json(state.recipe_query.find(id).await?))
}

#[tracing::instrument(skip_all)]
pub async fn unique_ingredients(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.recipe_query.unique_ingredients().await?))
}

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use sqlx::SqlitePool;

use crate::{config::Config, error::AppError, middleware::auth_middleware};

mod auth;
mod extract;
mod health;
mod planner;
mod recipes;
mod users;

pub use extract::{ApiJson, ApiQuery};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_command: nutriplan_user::Command,
    pub user_query: nutriplan_user::Query,
    pub recipe_query: nutriplan_recipe::Query,
    pub planner_command: nutriplan_planner::Command,
    pub planner_query: nutriplan_planner::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: Config, state: nutriplan_shared::State) -> Self {
        Self {
            config,
            user_command: nutriplan_user::Command(state.clone()),
            user_query: nutriplan_user::Query(state.clone()),
            recipe_query: nutriplan_recipe::Query(state.clone()),
            planner_command: nutriplan_planner::Command(state.clone()),
            planner_query: nutriplan_planner::Query(state.clone()),
            pool: state.read_db,
        }
    }
}

pub async fn fallback() -> AppError {
    AppError::NotFound("Route not found".to_owned())
}

pub fn router(app_state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/planner/today", get(planner::today))
        .route("/api/planner/today/summary", get(planner::summary))
        .route("/api/planner/entries", post(planner::add_entry))
        .route("/api/planner/entries/{id}", delete(planner::remove_entry))
        .route("/api/users/me", get(users::me).put(users::update_profile))
        .route("/api/users/me/pantry", put(users::update_pantry))
        .route("/api/users/me/calorie-history", get(users::calorie_history))
        .route(
            "/api/users/me/full-calorie-history",
            get(users::full_calorie_history),
        )
        .route(
            "/api/users/me/recommended-recipes",
            get(users::recommended_recipes),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/recipes", get(recipes::list))
        .route("/api/recipes/search", get(recipes::search))
        .route("/api/recipes/{id}", get(recipes::detail))
        .route("/api/ingredients/unique", get(recipes::unique_ingredients))
        .merge(protected)
        .fallback(fallback)
        .with_state(app_state)
}

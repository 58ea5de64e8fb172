#![allow(dead_code)]

use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use nutriplan::{AppState, config::Config};
use nutriplan_recipe::{ImportIngredient, ImportRecipe};
use nutriplan_shared::State;
use serde_json::{Value, json};
use tower::ServiceExt;

pub async fn setup_test_state(path: &Path) -> anyhow::Result<State> {
    let url = format!("sqlite:{}", path.join("db.sqlite3").display());
    let pool = nutriplan::db::create_pool(&url, 1).await?;
    nutriplan::db::run_migrations(&pool).await?;

    Ok(State::single(pool))
}

pub fn app(state: State) -> anyhow::Result<Router> {
    let config = Config::load(None)?;

    Ok(nutriplan::router(AppState::new(config, state)))
}

fn recipe(title: &str, kcal: u32, ingredients: &[&str]) -> ImportRecipe {
    ImportRecipe {
        title: title.to_owned(),
        description: format!("{title} description"),
        kcal,
        time: 15,
        level: "Easy".to_owned(),
        ingredients: ingredients
            .iter()
            .map(|name| ImportIngredient {
                name: (*name).to_owned(),
                quantity: "1".to_owned(),
            })
            .collect(),
        steps: vec!["Prepare".to_owned(), "Serve".to_owned()],
        ..Default::default()
    }
}

/// Tomato Salad (250), Garlic Pasta (600) and Omelette (350), in that order.
pub async fn seed_recipes(state: &State) -> anyhow::Result<Vec<String>> {
    let ids = nutriplan_recipe::Command(state.clone())
        .import(vec![
            recipe("Tomato Salad", 250, &["Tomato", "Olive oil", "Basil"]),
            recipe("Garlic Pasta", 600, &["Spaghetti", "Garlic", "Olive oil"]),
            recipe("Omelette", 350, &["Eggs", "Butter"]),
        ])
        .await?;

    Ok(ids)
}

pub fn register_body(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{name}@nutriplan.localhost"),
        "password": "my_password",
        "calorieGoal": 2000,
        "phone": "555-0100",
        "address": "1 Main Street",
        "idNumber": "ID-0001",
    })
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user_id: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

pub async fn register(app: &Router, name: &str) -> anyhow::Result<String> {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/register",
        None,
        Some(register_body(name)),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    Ok(body["id"].as_str().unwrap_or_default().to_owned())
}

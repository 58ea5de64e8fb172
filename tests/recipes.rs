mod helpers;

use axum::http::{Method, StatusCode};
use serde_json::json;
use temp_dir::TempDir;

#[tokio::test]
async fn test_list_and_detail() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.path()).await?;
    let ids = helpers::seed_recipes(&state).await?;
    let app = helpers::app(state)?;

    let (status, body) = helpers::send(&app, Method::GET, "/api/recipes", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    let titles = body
        .as_array()
        .map(|recipes| recipes.iter().map(|r| r["title"].clone()).collect::<Vec<_>>())
        .unwrap_or_default();
    assert_eq!(titles, vec!["Garlic Pasta", "Omelette", "Tomato Salad"]);

    let (status, body) = helpers::send(
        &app,
        Method::GET,
        &format!("/api/recipes/{}", ids[0]),
        None,
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Tomato Salad");
    assert_eq!(body["kcal"], 250);
    assert_eq!(body["ingredients"][0]["name"], "Tomato");
    assert_eq!(body["steps"][1]["order"], 2);
    assert_eq!(body["steps"][1]["description"], "Serve");

    let (status, body) =
        helpers::send(&app, Method::GET, "/api/recipes/missing", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Recipe not found");

    Ok(())
}

#[tokio::test]
async fn test_search_by_ingredient() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.path()).await?;
    helpers::seed_recipes(&state).await?;
    let app = helpers::app(state)?;

    let (status, body) = helpers::send(
        &app,
        Method::GET,
        "/api/recipes/search?ingredient=olive",
        None,
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let (status, body) = helpers::send(
        &app,
        Method::GET,
        "/api/recipes/search?ingredient=%25",
        None,
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) =
        helpers::send(&app, Method::GET, "/api/recipes/search", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The ingredient query parameter is required.");

    let (status, _) = helpers::send(
        &app,
        Method::GET,
        "/api/recipes/search?ingredient=%20%20",
        None,
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_unique_ingredients() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.path()).await?;
    helpers::seed_recipes(&state).await?;
    let app = helpers::app(state)?;

    let (status, body) =
        helpers::send(&app, Method::GET, "/api/ingredients/unique", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!(["Basil", "Butter", "Eggs", "Garlic", "Olive oil", "Spaghetti", "Tomato"])
    );

    Ok(())
}

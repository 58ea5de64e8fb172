use httpmock::prelude::*;
use nutriplan_client::{ApiClient, ClientError};
use serde_json::json;

fn recipe_json(id: &str, title: &str, kcal: u32, image: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "image": image,
        "kcal": kcal,
        "time": 15,
        "level": "Easy",
        "ingredients": [{ "id": "i1", "name": "Tomato", "quantity": "2" }],
        "steps": [{ "id": "s1", "order": 1, "description": "Slice" }]
    })
}

#[tokio::test]
async fn test_sends_user_header() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/planner/today")
                .header("X-User-ID", "01JUSER");
            then.status(200).json_body(json!({
                "id": "01JPLAN",
                "userId": "01JUSER",
                "date": "2026-10-16",
                "entries": []
            }));
        })
        .await;

    let api = ApiClient::new(server.base_url()).authenticated("01JUSER");
    let plan = api.today().await?;

    mock.assert_async().await;
    assert_eq!(plan.id, "01JPLAN");
    assert_eq!(plan.date, "2026-10-16");

    Ok(())
}

#[tokio::test]
async fn test_error_body_becomes_api_error() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login");
            then.status(401).json_body(json!({
                "error": "Unauthorized",
                "message": "Invalid email or password."
            }));
        })
        .await;

    let api = ApiClient::new(format!("{}/", server.base_url()));
    let err = api
        .login("john@nutriplan.localhost", "nope")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Invalid email or password.");

    Ok(())
}

#[tokio::test]
async fn test_error_without_body_uses_reason() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/planner/entries/01JENTRY");
            then.status(404);
        })
        .await;

    let api = ApiClient::new(server.base_url()).authenticated("01JUSER");
    let err = api.remove_entry("01JENTRY").await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "Not Found");

    Ok(())
}

#[tokio::test]
async fn test_search_and_recipe() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let search = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/recipes/search")
                .query_param("ingredient", "tomato");
            then.status(200)
                .json_body(json!([recipe_json("r1", "Tomato Salad", 250, None)]));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let recipes = api.search_recipes("tomato").await?;

    search.assert_async().await;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].row.title, "Tomato Salad");
    assert_eq!(recipes[0].steps[0].position, 1);
    assert_eq!(recipes[0].ingredients[0].name, "Tomato");

    Ok(())
}


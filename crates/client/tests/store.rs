use httpmock::prelude::*;
use nutriplan_client::{ApiClient, ClientError, PlannerStore, RecipeStore, SessionStore};
use serde_json::json;

fn entry_json(id: &str, recipe_id: &str, kcal: u32) -> serde_json::Value {
    json!({
        "id": id,
        "planId": "01JPLAN",
        "recipeId": recipe_id,
        "createdAt": 0,
        "recipe": {
            "id": recipe_id,
            "title": recipe_id,
            "description": "",
            "image": null,
            "kcal": kcal,
            "time": 10,
            "level": "Easy"
        }
    })
}

fn profile_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": "john@nutriplan.localhost",
        "name": "john",
        "calorieGoal": 2000,
        "avatar": "https://i.pravatar.cc/150?u=john%40nutriplan.localhost",
        "phone": "555-0100",
        "address": "1 Main Street",
        "idNumber": "ID-0001",
        "pantry": [],
        "createdAt": 0,
        "updatedAt": null
    })
}

#[tokio::test]
async fn test_session_login_and_logout() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200).json_body(profile_json("01JUSER"));
        })
        .await;

    let mut session = SessionStore::new(ApiClient::new(server.base_url()));
    assert!(session.api().user_id().is_none());

    let profile = session.login("john@nutriplan.localhost", "my_password").await?;
    assert_eq!(profile.calorie_goal, 2000);
    assert_eq!(session.user_id(), Some("01JUSER"));
    assert_eq!(session.api().user_id(), Some("01JUSER"));

    session.logout();
    assert!(session.profile().is_none());
    assert!(session.api().user_id().is_none());

    Ok(())
}

#[tokio::test]
async fn test_fetch_planner_requires_user() {
    let mut planner = PlannerStore::default();
    assert!(planner.is_loading);

    planner
        .fetch_planner(&ApiClient::new("http://127.0.0.1:9"))
        .await;

    assert!(!planner.is_loading);
    assert_eq!(planner.error.as_deref(), Some("User not authenticated."));
    assert!(planner.plan_id.is_none());
}

#[tokio::test]
async fn test_fetch_planner_failure() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/planner/today");
            then.status(500).json_body(json!({
                "error": "InternalServerError",
                "message": "Internal server error"
            }));
        })
        .await;

    let api = ApiClient::new(server.base_url()).authenticated("01JUSER");
    let mut planner = PlannerStore::default();
    planner.fetch_planner(&api).await;

    assert!(!planner.is_loading);
    assert_eq!(planner.error.as_deref(), Some("Could not load the planner."));

    Ok(())
}

#[tokio::test]
async fn test_planner_add_and_remove() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/planner/today");
            then.status(200).json_body(json!({
                "id": "01JPLAN",
                "userId": "01JUSER",
                "date": "2026-10-16",
                "entries": [entry_json("e1", "salad", 250)]
            }));
        })
        .await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/planner/entries")
                .json_body(json!({ "planId": "01JPLAN", "recipeId": "salad" }));
            then.status(201).json_body(entry_json("e2", "salad", 250));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/planner/entries/e1");
            then.status(204);
        })
        .await;

    let api = ApiClient::new(server.base_url()).authenticated("01JUSER");
    let mut planner = PlannerStore::default();

    let err = planner.add_recipe(&api, "salad").await.unwrap_err();
    assert!(matches!(err, ClientError::NoPlan));

    planner.fetch_planner(&api).await;
    assert_eq!(planner.plan_id.as_deref(), Some("01JPLAN"));
    assert!(planner.error.is_none());

    let added = planner.add_recipe(&api, "salad").await?;
    assert_eq!(added.id, "e2");
    assert_eq!(added.recipe.kcal, 250);
    add.assert_async().await;

    assert_eq!(planner.total_calories(), 500);
    let groups = planner.grouped();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].plan_entry_ids, vec!["e1", "e2"]);
    assert_eq!(planner.summary(400).remaining_calories, 0);

    planner.remove_recipe(&api, "e1").await?;
    assert_eq!(
        planner.entries.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
        vec!["e2"]
    );

    let err = planner
        .remove_recipe(&api.anonymous(), "e2")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert_eq!(planner.entries.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_recipe_store_search() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let search = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/recipes/search")
                .query_param("ingredient", "olive oil");
            then.status(200).json_body(json!([
                {
                    "id": "r1", "title": "Garlic Pasta", "description": "", "image": null,
                    "kcal": 600, "time": 20, "level": "Easy", "ingredients": [], "steps": []
                },
                {
                    "id": "r2", "title": "Salad", "description": "", "image": "salad.jpg",
                    "kcal": 250, "time": 5, "level": "Easy", "ingredients": [], "steps": []
                }
            ]));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let mut store = RecipeStore::new("/assets/recipes");

    store.search_recipes(&api, "  Olive OIL ").await;
    search.assert_async().await;

    assert!(!store.is_loading);
    assert_eq!(
        store
            .recipes
            .iter()
            .map(|r| r.row.image.as_deref().unwrap_or_default())
            .collect::<Vec<_>>(),
        vec![
            "https://picsum.photos/seed/garlic-pasta/400/300",
            "/assets/recipes/salad.jpg"
        ]
    );

    store.search_recipes(&api, "   ").await;
    assert!(store.recipes.is_empty());
    assert!(!store.is_loading);

    Ok(())
}

#[tokio::test]
async fn test_recipe_store_failure_leaves_results_empty() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/recipes/search");
            then.status(500);
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let mut store = RecipeStore::new("/assets/recipes");

    store.search_recipes(&api, "egg").await;

    assert!(store.recipes.is_empty());
    assert!(!store.is_loading);

    store.clear_search();
    assert!(store.recipes.is_empty());

    Ok(())
}

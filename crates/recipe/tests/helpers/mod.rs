use std::{path::PathBuf, str::FromStr};

use nutriplan_recipe::{ImportIngredient, ImportRecipe};
use nutriplan_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    nutriplan_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

pub fn recipe(title: &str, kcal: u32, ingredients: &[&str]) -> ImportRecipe {
    ImportRecipe {
        title: title.to_owned(),
        description: format!("{title} description"),
        image: None,
        kcal,
        time: 20,
        level: "Easy".to_owned(),
        ingredients: ingredients
            .iter()
            .map(|name| ImportIngredient {
                name: (*name).to_owned(),
                quantity: "1 unit".to_owned(),
            })
            .collect(),
        steps: vec!["Prepare".to_owned(), "Cook".to_owned(), "Serve".to_owned()],
    }
}

#[allow(dead_code)]
pub async fn seed(state: &State) -> anyhow::Result<Vec<String>> {
    let ids = nutriplan_recipe::Command(state.clone())
        .import(vec![
            recipe("Tomato Salad", 250, &["Tomato", "Lettuce", "Olive oil"]),
            recipe("Garlic Pasta", 600, &["Pasta", "Garlic", "Olive oil"]),
            recipe("Omelette", 350, &["Eggs", "Butter"]),
        ])
        .await?;

    Ok(ids)
}

use std::{path::PathBuf, str::FromStr};

use nutriplan_recipe::{ImportIngredient, ImportRecipe};
use nutriplan_shared::State;
use nutriplan_user::RegisterInput;
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

pub async fn create_user(state: &State, name: &str) -> anyhow::Result<String> {
    let user = nutriplan_user::Command(state.clone())
        .register(RegisterInput {
            name: name.to_owned(),
            email: format!("{name}@nutriplan.localhost"),
            password: "my_password".to_owned(),
            calorie_goal: Some(2000),
            phone: "555-0100".to_owned(),
            address: "1 Main Street".to_owned(),
            id_number: "ID-0001".to_owned(),
        })
        .await?;

    Ok(user.id)
}

fn recipe(title: &str, kcal: u32) -> ImportRecipe {
    ImportRecipe {
        title: title.to_owned(),
        kcal,
        ingredients: vec![ImportIngredient {
            name: "Water".to_owned(),
            quantity: "1 cup".to_owned(),
        }],
        steps: vec!["Cook".to_owned()],
        ..Default::default()
    }
}

/// Imports three recipes: 250, 600 and 150 kcal.
pub async fn seed_recipes(state: &State) -> anyhow::Result<Vec<String>> {
    let ids = nutriplan_recipe::Command(state.clone())
        .import(vec![
            recipe("Salad", 250),
            recipe("Pasta", 600),
            recipe("Soup", 150),
        ])
        .await?;

    Ok(ids)
}

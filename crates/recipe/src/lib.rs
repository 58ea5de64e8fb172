mod recommend;

pub use recommend::rank_by_pantry;

use serde::{Deserialize, Serialize};

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}

/// Recipe scalars, without ingredients or steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct RecipeRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub kcal: u32,
    pub time: u32,
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(sqlx::FromRow))]
pub struct Ingredient {
    pub id: String,
    #[serde(skip)]
    pub recipe_id: String,
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(sqlx::FromRow))]
pub struct Step {
    pub id: String,
    #[serde(skip)]
    pub recipe_id: String,
    #[serde(rename = "order")]
    pub position: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(flatten)]
    pub row: RecipeRow,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
}

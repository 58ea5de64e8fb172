mod summary;

pub use summary::*;

use nutriplan_recipe::RecipeRow;
use serde::{Deserialize, Serialize};

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;
        mod repository;

        pub use command::*;
        pub use query::*;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub id: String,
    pub plan_id: String,
    pub recipe_id: String,
    pub recipe: RecipeRow,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub id: String,
    pub user_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieDay {
    pub date: String,
    pub total_calories: u32,
}

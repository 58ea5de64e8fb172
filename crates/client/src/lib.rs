//! Typed client for the nutriplan API and the stores a front end keeps
//! its state in: session, daily planner and recipe search.

mod api;
mod error;
mod image;
mod store;
mod types;

pub use api::ApiClient;
pub use error::{ClientError, Result};
pub use image::image_url;
pub use nutriplan_planner::{CalorieDay, DailyPlan, PlanEntry, PlanSummary, RecipeGroup};
pub use nutriplan_recipe::{Ingredient, Recipe, RecipeRow, Step};
pub use store::*;
pub use types::*;

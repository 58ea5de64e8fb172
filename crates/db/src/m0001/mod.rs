mod daily_plan;
mod plan_entry;
mod recipe;
mod recipe_ingredient;
mod recipe_step;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "nutriplan",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        recipe::CreateTable,
        recipe_ingredient::CreateTable,
        recipe_ingredient::CreateIdx1,
        recipe_ingredient::CreateIdx2,
        recipe_step::CreateTable,
        recipe_step::CreateIdx1,
        daily_plan::CreateTable,
        daily_plan::CreateUk1,
        plan_entry::CreateTable,
        plan_entry::CreateIdx1
    ]
);

use std::ops::Deref;

use nutriplan_db::table::{Recipe, RecipeIngredient, RecipeStep};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Generator;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ImportIngredient {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(max = 150))]
    pub quantity: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ImportRecipe {
    #[validate(length(min = 1, max = 150))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: String,
    pub image: Option<String>,
    pub kcal: u32,
    pub time: u32,
    #[validate(length(max = 30))]
    pub level: String,
    #[validate(nested)]
    pub ingredients: Vec<ImportIngredient>,
    pub steps: Vec<String>,
}

#[derive(Clone)]
pub struct Command(pub nutriplan_shared::State);

impl Deref for Command {
    type Target = nutriplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    /// Inserts every recipe with its ingredients and steps in a single
    /// transaction. Nothing is written if one recipe fails validation.
    #[tracing::instrument(skip_all, fields(count = recipes.len()))]
    pub async fn import(&self, recipes: Vec<ImportRecipe>) -> nutriplan_shared::Result<Vec<String>> {
        for recipe in recipes.iter() {
            recipe.validate()?;
        }

        // Monotonic ids keep children in insertion order.
        let mut ids = Generator::new();
        let mut next_id = move || {
            ids.generate()
                .map(|id| id.to_string())
                .map_err(|e| anyhow::anyhow!("{e}"))
        };

        let created_at = nutriplan_shared::now();
        let mut tx = self.write_db.begin().await?;
        let mut recipe_ids = Vec::with_capacity(recipes.len());

        for recipe in recipes {
            let recipe_id = next_id()?;

            let statement = Query::insert()
                .into_table(Recipe::Table)
                .columns([
                    Recipe::Id,
                    Recipe::Title,
                    Recipe::Description,
                    Recipe::Image,
                    Recipe::Kcal,
                    Recipe::Time,
                    Recipe::Level,
                    Recipe::CreatedAt,
                ])
                .values_panic([
                    recipe_id.to_owned().into(),
                    recipe.title.trim().into(),
                    recipe.description.into(),
                    recipe.image.filter(|i| !i.trim().is_empty()).into(),
                    recipe.kcal.into(),
                    recipe.time.into(),
                    recipe.level.into(),
                    created_at.into(),
                ])
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            for ingredient in recipe.ingredients {
                let statement = Query::insert()
                    .into_table(RecipeIngredient::Table)
                    .columns([
                        RecipeIngredient::Id,
                        RecipeIngredient::RecipeId,
                        RecipeIngredient::Name,
                        RecipeIngredient::Quantity,
                    ])
                    .values_panic([
                        next_id()?.into(),
                        recipe_id.to_owned().into(),
                        ingredient.name.trim().into(),
                        ingredient.quantity.into(),
                    ])
                    .to_owned();

                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                sqlx::query_with(&sql, values).execute(&mut *tx).await?;
            }

            for (position, description) in recipe.steps.into_iter().enumerate() {
                let statement = Query::insert()
                    .into_table(RecipeStep::Table)
                    .columns([
                        RecipeStep::Id,
                        RecipeStep::RecipeId,
                        RecipeStep::Position,
                        RecipeStep::Description,
                    ])
                    .values_panic([
                        next_id()?.into(),
                        recipe_id.to_owned().into(),
                        (position as u32 + 1).into(),
                        description.into(),
                    ])
                    .to_owned();

                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                sqlx::query_with(&sql, values).execute(&mut *tx).await?;
            }

            recipe_ids.push(recipe_id);
        }

        tx.commit().await?;

        tracing::info!(count = recipe_ids.len(), "recipes imported");

        Ok(recipe_ids)
    }
}

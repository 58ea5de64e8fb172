use std::{collections::HashMap, ops::Deref};

use nutriplan_db::table::{Recipe as RecipeTable, RecipeIngredient, RecipeStep};
use sea_query::{Expr, ExprTrait, LikeExpr, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Ingredient, Recipe, RecipeRow, Step};

pub const MAX_RECOMMENDED: u16 = 50;

#[derive(Clone)]
pub struct Query(pub nutriplan_shared::State);

impl Deref for Query {
    type Target = nutriplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn select_rows() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            (RecipeTable::Table, RecipeTable::Id),
            (RecipeTable::Table, RecipeTable::Title),
            (RecipeTable::Table, RecipeTable::Description),
            (RecipeTable::Table, RecipeTable::Image),
            (RecipeTable::Table, RecipeTable::Kcal),
            (RecipeTable::Table, RecipeTable::Time),
            (RecipeTable::Table, RecipeTable::Level),
        ])
        .from(RecipeTable::Table)
        .order_by((RecipeTable::Table, RecipeTable::Title), Order::Asc)
        .order_by((RecipeTable::Table, RecipeTable::Id), Order::Asc)
        .to_owned()
}

/// Escapes LIKE wildcards so the term matches literally.
fn contains_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

impl Query {
    pub async fn list(&self) -> nutriplan_shared::Result<Vec<Recipe>> {
        self.fetch(select_rows()).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn search_by_ingredient(&self, term: &str) -> nutriplan_shared::Result<Vec<Recipe>> {
        let term = term.trim();
        if term.is_empty() {
            nutriplan_shared::user!("The ingredient query parameter is required.");
        }

        let matching = sea_query::Query::select()
            .column(RecipeIngredient::RecipeId)
            .from(RecipeIngredient::Table)
            .and_where(Expr::col(RecipeIngredient::Name).like(contains_pattern(term)))
            .to_owned();

        let statement = select_rows()
            .and_where(Expr::col((RecipeTable::Table, RecipeTable::Id)).in_subquery(matching))
            .to_owned();

        self.fetch(statement).await
    }

    pub async fn find(&self, id: impl Into<String>) -> nutriplan_shared::Result<Recipe> {
        let statement = select_rows()
            .and_where(Expr::col((RecipeTable::Table, RecipeTable::Id)).eq(id.into()))
            .to_owned();

        let Some(recipe) = self.fetch(statement).await?.into_iter().next() else {
            nutriplan_shared::not_found!("Recipe not found");
        };

        Ok(recipe)
    }

    pub async fn unique_ingredients(&self) -> nutriplan_shared::Result<Vec<String>> {
        let statement = sea_query::Query::select()
            .distinct()
            .column(RecipeIngredient::Name)
            .from(RecipeIngredient::Table)
            .order_by(RecipeIngredient::Name, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let names = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(names.into_iter().map(|(name,)| name).collect())
    }

    /// Recipes ranked against the pantry, `count` clamped to 1..=50.
    pub async fn recommended(
        &self,
        pantry: &[String],
        count: u16,
    ) -> nutriplan_shared::Result<Vec<Recipe>> {
        let count = count.clamp(1, MAX_RECOMMENDED) as usize;
        let recipes = self.list().await?;

        Ok(crate::rank_by_pantry(recipes, pantry)
            .into_iter()
            .take(count)
            .collect())
    }

    async fn fetch(&self, statement: SelectStatement) -> nutriplan_shared::Result<Vec<Recipe>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let ids = rows.iter().map(|r| r.id.to_owned()).collect::<Vec<_>>();

        let statement = sea_query::Query::select()
            .columns([
                RecipeIngredient::Id,
                RecipeIngredient::RecipeId,
                RecipeIngredient::Name,
                RecipeIngredient::Quantity,
            ])
            .from(RecipeIngredient::Table)
            .and_where(Expr::col(RecipeIngredient::RecipeId).is_in(ids.clone()))
            .order_by(RecipeIngredient::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let ingredients = sqlx::query_as_with::<_, Ingredient, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let statement = sea_query::Query::select()
            .columns([
                RecipeStep::Id,
                RecipeStep::RecipeId,
                RecipeStep::Position,
                RecipeStep::Description,
            ])
            .from(RecipeStep::Table)
            .and_where(Expr::col(RecipeStep::RecipeId).is_in(ids))
            .order_by(RecipeStep::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let steps = sqlx::query_as_with::<_, Step, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut recipe_ingredients: HashMap<String, Vec<Ingredient>> = HashMap::new();
        for ingredient in ingredients {
            recipe_ingredients
                .entry(ingredient.recipe_id.to_owned())
                .or_default()
                .push(ingredient);
        }

        let mut recipe_steps: HashMap<String, Vec<Step>> = HashMap::new();
        for step in steps {
            recipe_steps
                .entry(step.recipe_id.to_owned())
                .or_default()
                .push(step);
        }

        Ok(rows
            .into_iter()
            .map(|row| Recipe {
                ingredients: recipe_ingredients.remove(&row.id).unwrap_or_default(),
                steps: recipe_steps.remove(&row.id).unwrap_or_default(),
                row,
            })
            .collect())
    }
}

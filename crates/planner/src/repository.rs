use nutriplan_db::table::{
    DailyPlan as DailyPlanTable, PlanEntry as PlanEntryTable, Recipe as RecipeTable,
};
use nutriplan_recipe::RecipeRow;
use sea_query::{Expr, ExprTrait, JoinType, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::{DailyPlan, PlanEntry};

#[derive(FromRow)]
pub struct PlanRow {
    pub id: String,
    pub user_id: String,
    pub day: i64,
}

impl PlanRow {
    pub fn into_plan(self, entries: Vec<PlanEntry>) -> nutriplan_shared::Result<DailyPlan> {
        let date = nutriplan_shared::day_from_timestamp(self.day)?;

        Ok(DailyPlan {
            id: self.id,
            user_id: self.user_id,
            date: nutriplan_shared::format_day(date)?,
            entries,
        })
    }
}

#[derive(FromRow)]
pub struct EntryRow {
    pub id: String,
    pub plan_id: String,
    pub recipe_id: String,
    pub created_at: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub kcal: u32,
    pub time: u32,
    pub level: String,
}

impl From<EntryRow> for PlanEntry {
    fn from(row: EntryRow) -> Self {
        Self {
            recipe: RecipeRow {
                id: row.recipe_id.to_owned(),
                title: row.title,
                description: row.description,
                image: row.image,
                kcal: row.kcal,
                time: row.time,
                level: row.level,
            },
            id: row.id,
            plan_id: row.plan_id,
            recipe_id: row.recipe_id,
            created_at: row.created_at,
        }
    }
}

pub enum FindType {
    Day { user_id: String, day: i64 },
    Id { user_id: String, id: String },
}

pub(crate) async fn find_plan(
    pool: &SqlitePool,
    arg_type: FindType,
) -> nutriplan_shared::Result<Option<PlanRow>> {
    let mut statement = Query::select()
        .columns([DailyPlanTable::Id, DailyPlanTable::UserId, DailyPlanTable::Day])
        .from(DailyPlanTable::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Day { user_id, day } => statement
            .and_where(Expr::col(DailyPlanTable::UserId).eq(user_id))
            .and_where(Expr::col(DailyPlanTable::Day).eq(day)),
        FindType::Id { user_id, id } => statement
            .and_where(Expr::col(DailyPlanTable::UserId).eq(user_id))
            .and_where(Expr::col(DailyPlanTable::Id).eq(id)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Plans of a user in ascending day order, optionally from `since` onwards.
pub(crate) async fn find_plans(
    pool: &SqlitePool,
    user_id: String,
    since: Option<i64>,
) -> nutriplan_shared::Result<Vec<PlanRow>> {
    let mut statement = Query::select()
        .columns([DailyPlanTable::Id, DailyPlanTable::UserId, DailyPlanTable::Day])
        .from(DailyPlanTable::Table)
        .and_where(Expr::col(DailyPlanTable::UserId).eq(user_id))
        .order_by(DailyPlanTable::Day, Order::Asc)
        .to_owned();

    if let Some(since) = since {
        statement.and_where(Expr::col(DailyPlanTable::Day).gte(since));
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn create_plan_if_missing(
    pool: &SqlitePool,
    id: String,
    user_id: String,
    day: i64,
) -> nutriplan_shared::Result<()> {
    let statement = Query::insert()
        .into_table(DailyPlanTable::Table)
        .columns([
            DailyPlanTable::Id,
            DailyPlanTable::UserId,
            DailyPlanTable::Day,
            DailyPlanTable::CreatedAt,
        ])
        .values_panic([
            id.into(),
            user_id.into(),
            day.into(),
            nutriplan_shared::now().into(),
        ])
        .on_conflict(
            OnConflict::columns([DailyPlanTable::UserId, DailyPlanTable::Day])
                .do_nothing()
                .to_owned(),
        )
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub enum EntryFilter {
    Id(String),
    Plans(Vec<String>),
}

/// Entries joined with their recipe, in insertion order.
pub(crate) async fn find_entries(
    pool: &SqlitePool,
    filter: EntryFilter,
) -> nutriplan_shared::Result<Vec<EntryRow>> {
    let mut statement = Query::select()
        .columns([
            (PlanEntryTable::Table, PlanEntryTable::Id),
            (PlanEntryTable::Table, PlanEntryTable::PlanId),
            (PlanEntryTable::Table, PlanEntryTable::RecipeId),
            (PlanEntryTable::Table, PlanEntryTable::CreatedAt),
        ])
        .columns([
            (RecipeTable::Table, RecipeTable::Title),
            (RecipeTable::Table, RecipeTable::Description),
            (RecipeTable::Table, RecipeTable::Image),
            (RecipeTable::Table, RecipeTable::Kcal),
            (RecipeTable::Table, RecipeTable::Time),
            (RecipeTable::Table, RecipeTable::Level),
        ])
        .from(PlanEntryTable::Table)
        .join(
            JoinType::InnerJoin,
            RecipeTable::Table,
            Expr::col((RecipeTable::Table, RecipeTable::Id))
                .equals((PlanEntryTable::Table, PlanEntryTable::RecipeId)),
        )
        .order_by_expr(Expr::cust(r#""plan_entry"."rowid""#), Order::Asc)
        .to_owned();

    match filter {
        EntryFilter::Id(id) => {
            statement.and_where(Expr::col((PlanEntryTable::Table, PlanEntryTable::Id)).eq(id))
        }
        EntryFilter::Plans(plan_ids) => statement.and_where(
            Expr::col((PlanEntryTable::Table, PlanEntryTable::PlanId)).is_in(plan_ids),
        ),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, EntryRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn recipe_exists(pool: &SqlitePool, id: String) -> nutriplan_shared::Result<bool> {
    let statement = Query::select()
        .column(RecipeTable::Id)
        .from(RecipeTable::Table)
        .and_where(Expr::col(RecipeTable::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn create_entry(
    pool: &SqlitePool,
    id: String,
    plan_id: String,
    recipe_id: String,
) -> nutriplan_shared::Result<()> {
    let statement = Query::insert()
        .into_table(PlanEntryTable::Table)
        .columns([
            PlanEntryTable::Id,
            PlanEntryTable::PlanId,
            PlanEntryTable::RecipeId,
            PlanEntryTable::CreatedAt,
        ])
        .values_panic([
            id.into(),
            plan_id.into(),
            recipe_id.into(),
            nutriplan_shared::now().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Deletes the entry only when its plan belongs to `user_id`.
pub(crate) async fn delete_entry(
    pool: &SqlitePool,
    id: String,
    user_id: String,
) -> nutriplan_shared::Result<bool> {
    let owned_plans = Query::select()
        .column(DailyPlanTable::Id)
        .from(DailyPlanTable::Table)
        .and_where(Expr::col(DailyPlanTable::UserId).eq(user_id))
        .to_owned();

    let statement = Query::delete()
        .from_table(PlanEntryTable::Table)
        .and_where(Expr::col(PlanEntryTable::Id).eq(id))
        .and_where(Expr::col(PlanEntryTable::PlanId).in_subquery(owned_plans))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

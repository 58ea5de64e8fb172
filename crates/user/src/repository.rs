use nutriplan_db::table::User;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub calorie_goal: u32,
    pub avatar: String,
    pub phone: String,
    pub address: String,
    pub id_number: String,
    pub pantry: sqlx::types::Json<Vec<String>>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

pub enum FindType {
    Id(String),
    Email(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> nutriplan_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([
            User::Id,
            User::Email,
            User::Password,
            User::Name,
            User::CalorieGoal,
            User::Avatar,
            User::Phone,
            User::Address,
            User::IdNumber,
            User::Pantry,
            User::CreatedAt,
            User::UpdatedAt,
        ])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn exists(pool: &SqlitePool, id: impl Into<String>) -> nutriplan_shared::Result<bool> {
    let statement = Query::select()
        .column(User::Id)
        .from(User::Table)
        .and_where(Expr::col(User::Id).eq(id.into()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub struct CreateInput {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub calorie_goal: u32,
    pub avatar: String,
    pub phone: String,
    pub address: String,
    pub id_number: String,
    pub created_at: i64,
}

pub(crate) async fn create(pool: &SqlitePool, input: CreateInput) -> nutriplan_shared::Result<()> {
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Id,
            User::Email,
            User::Password,
            User::Name,
            User::CalorieGoal,
            User::Avatar,
            User::Phone,
            User::Address,
            User::IdNumber,
            User::Pantry,
            User::CreatedAt,
        ])
        .values_panic([
            input.id.into(),
            input.email.into(),
            input.password.into(),
            input.name.into(),
            input.calorie_goal.into(),
            input.avatar.into(),
            input.phone.into(),
            input.address.into(),
            input.id_number.into(),
            "[]".into(),
            input.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub struct UpdateInput {
    pub id: String,
    pub name: Option<String>,
    pub calorie_goal: Option<u32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub id_number: Option<String>,
    pub pantry: Option<Vec<String>>,
}

/// Returns false when no user matched `input.id`.
pub(crate) async fn update(pool: &SqlitePool, input: UpdateInput) -> nutriplan_shared::Result<bool> {
    let mut statement = Query::update()
        .table(User::Table)
        .value(User::UpdatedAt, nutriplan_shared::now())
        .and_where(Expr::col(User::Id).eq(input.id))
        .to_owned();

    if let Some(name) = input.name {
        statement.value(User::Name, name);
    }

    if let Some(calorie_goal) = input.calorie_goal {
        statement.value(User::CalorieGoal, calorie_goal);
    }

    if let Some(phone) = input.phone {
        statement.value(User::Phone, phone);
    }

    if let Some(address) = input.address {
        statement.value(User::Address, address);
    }

    if let Some(id_number) = input.id_number {
        statement.value(User::IdNumber, id_number);
    }

    if let Some(pantry) = input.pantry {
        let pantry = serde_json::to_string(&pantry).map_err(anyhow::Error::from)?;
        statement.value(User::Pantry, pantry);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Password,
    Name,
    CalorieGoal,
    Avatar,
    Phone,
    Address,
    IdNumber,
    Pantry,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Title,
    Description,
    Image,
    Kcal,
    Time,
    Level,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    Id,
    RecipeId,
    Name,
    Quantity,
}

#[derive(Iden, Clone)]
pub enum RecipeStep {
    Table,
    Id,
    RecipeId,
    Position,
    Description,
}

#[derive(Iden, Clone)]
pub enum DailyPlan {
    Table,
    Id,
    UserId,
    Day,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PlanEntry {
    Table,
    Id,
    PlanId,
    RecipeId,
    CreatedAt,
}

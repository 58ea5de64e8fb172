use std::ops::Deref;

use serde::Serialize;

use crate::repository::UserRow;

mod login;
mod profile;
mod register;

pub use login::LoginInput;
pub use profile::{UpdateProfileInput, normalize_pantry};
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command(pub nutriplan_shared::State);

impl Deref for Command {
    type Target = nutriplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A user as exposed to clients. The password hash never leaves the crate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub calorie_goal: u32,
    pub avatar: String,
    pub phone: String,
    pub address: String,
    pub id_number: String,
    pub pantry: Vec<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
            calorie_goal: row.calorie_goal,
            avatar: row.avatar,
            phone: row.phone,
            address: row.address,
            id_number: row.id_number,
            pantry: row.pantry.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub calorie_goal: u32,
    pub avatar: String,
    pub phone: String,
    pub address: String,
    pub id_number: String,
    #[serde(default)]
    pub pantry: Vec<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub calorie_goal: u32,
    pub phone: String,
    pub address: String,
    pub id_number: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub calorie_goal: u32,
    pub phone: String,
    pub address: String,
    pub id_number: String,
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

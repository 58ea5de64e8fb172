use serde::Deserialize;
use validator::Validate;

use crate::{password, repository};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> nutriplan_shared::Result<super::User> {
        input.validate()?;

        let Some(user_row) = repository::find(
            &self.read_db,
            repository::FindType::Email(super::normalize_email(&input.email)),
        )
        .await?
        else {
            nutriplan_shared::unauthorized!("Invalid email or password.");
        };

        if !password::verify_password(&input.password, &user_row.password)? {
            nutriplan_shared::unauthorized!("Invalid email or password.");
        }

        Ok(user_row.into())
    }
}

use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use crate::{password, repository};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(
        required(message = "Calorie goal is required"),
        range(min = 1, message = "Calorie goal must be a positive number")
    )]
    pub calorie_goal: Option<u32>,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "ID number is required"))]
    pub id_number: String,
}

pub fn avatar_url(email: &str) -> String {
    format!("https://i.pravatar.cc/150?u={}", urlencoding::encode(email))
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> nutriplan_shared::Result<super::User> {
        let input = RegisterInput {
            name: input.name.trim().to_owned(),
            email: super::normalize_email(&input.email),
            phone: input.phone.trim().to_owned(),
            address: input.address.trim().to_owned(),
            id_number: input.id_number.trim().to_owned(),
            ..input
        };
        input.validate()?;

        if repository::find(
            &self.read_db,
            repository::FindType::Email(input.email.to_owned()),
        )
        .await?
        .is_some()
        {
            nutriplan_shared::conflict!("An account with this email already exists.");
        }

        let password_hash = password::hash_password(&input.password)?;
        let calorie_goal = input.calorie_goal.unwrap_or_default();
        let id = Ulid::new().to_string();
        let avatar = avatar_url(&input.email);

        let created = repository::create(
            &self.write_db,
            repository::CreateInput {
                id: id.to_owned(),
                email: input.email.to_owned(),
                password: password_hash,
                name: input.name,
                calorie_goal,
                avatar,
                phone: input.phone,
                address: input.address,
                id_number: input.id_number,
                created_at: nutriplan_shared::now(),
            },
        )
        .await;

        if let Err(err) = created {
            if err.is_unique_violation() {
                nutriplan_shared::conflict!("An account with this email already exists.");
            }

            return Err(err);
        }

        let Some(user) = repository::find(&self.write_db, repository::FindType::Id(id)).await?
        else {
            nutriplan_shared::bail!("User not found after register");
        };

        tracing::info!(user_id = %user.id, "user registered");

        Ok(user.into())
    }
}

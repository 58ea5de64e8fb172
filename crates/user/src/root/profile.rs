use std::collections::HashSet;

use serde::Deserialize;
use validator::Validate;

use crate::repository::{self, UpdateInput};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProfileInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
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

/// Trim, drop blanks, dedupe ignoring case (first spelling wins) and sort.
pub fn normalize_pantry(items: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pantry: Vec<String> = items
        .into_iter()
        .map(|item| item.as_ref().trim().to_owned())
        .filter(|item| !item.is_empty() && seen.insert(item.to_lowercase()))
        .collect();

    pantry.sort_by_key(|item| item.to_lowercase());
    pantry
}

impl super::Command {
    #[tracing::instrument(skip(self, input))]
    pub async fn update_profile(
        &self,
        id: impl Into<String> + std::fmt::Debug,
        input: UpdateProfileInput,
    ) -> nutriplan_shared::Result<super::User> {
        let input = UpdateProfileInput {
            name: input.name.trim().to_owned(),
            phone: input.phone.trim().to_owned(),
            address: input.address.trim().to_owned(),
            id_number: input.id_number.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let id = id.into();
        let updated = repository::update(
            &self.write_db,
            UpdateInput {
                id: id.to_owned(),
                name: Some(input.name),
                calorie_goal: input.calorie_goal,
                phone: Some(input.phone),
                address: Some(input.address),
                id_number: Some(input.id_number),
                pantry: None,
            },
        )
        .await?;

        if !updated {
            nutriplan_shared::not_found!("User not found");
        }

        self.reload(id).await
    }

    #[tracing::instrument(skip(self, pantry))]
    pub async fn update_pantry(
        &self,
        id: impl Into<String> + std::fmt::Debug,
        pantry: Vec<String>,
    ) -> nutriplan_shared::Result<super::User> {
        let id = id.into();
        let updated = repository::update(
            &self.write_db,
            UpdateInput {
                id: id.to_owned(),
                name: None,
                calorie_goal: None,
                phone: None,
                address: None,
                id_number: None,
                pantry: Some(normalize_pantry(pantry)),
            },
        )
        .await?;

        if !updated {
            nutriplan_shared::not_found!("User not found");
        }

        self.reload(id).await
    }

    async fn reload(&self, id: String) -> nutriplan_shared::Result<super::User> {
        let Some(user) = repository::find(&self.write_db, repository::FindType::Id(id)).await?
        else {
            nutriplan_shared::not_found!("User not found");
        };

        Ok(user.into())
    }
}

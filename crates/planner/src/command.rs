use std::ops::Deref;

use serde::Deserialize;
use time::Date;
use ulid::Ulid;
use validator::Validate;

use crate::{
    DailyPlan, PlanEntry,
    repository::{self, EntryFilter, FindType},
};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AddEntryInput {
    #[validate(length(min = 1, message = "planId is required"))]
    pub plan_id: String,
    #[validate(length(min = 1, message = "recipeId is required"))]
    pub recipe_id: String,
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
    /// Returns the user's plan for `date`, creating an empty one on first use.
    #[tracing::instrument(skip(self))]
    pub async fn today(&self, user_id: &str, date: Date) -> nutriplan_shared::Result<DailyPlan> {
        let day = nutriplan_shared::day_start(date);

        repository::create_plan_if_missing(
            &self.write_db,
            Ulid::new().to_string(),
            user_id.to_owned(),
            day,
        )
        .await?;

        let Some(plan) = repository::find_plan(
            &self.write_db,
            FindType::Day {
                user_id: user_id.to_owned(),
                day,
            },
        )
        .await?
        else {
            nutriplan_shared::bail!("Daily plan missing after insert for {user_id}");
        };

        let entries =
            repository::find_entries(&self.write_db, EntryFilter::Plans(vec![plan.id.to_owned()]))
                .await?
                .into_iter()
                .map(PlanEntry::from)
                .collect();

        plan.into_plan(entries)
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_entry(
        &self,
        user_id: &str,
        input: AddEntryInput,
    ) -> nutriplan_shared::Result<PlanEntry> {
        input.validate()?;

        let plan = repository::find_plan(
            &self.read_db,
            FindType::Id {
                user_id: user_id.to_owned(),
                id: input.plan_id,
            },
        )
        .await?;

        let Some(plan) = plan else {
            nutriplan_shared::not_found!("Daily plan not found");
        };

        if !repository::recipe_exists(&self.read_db, input.recipe_id.to_owned()).await? {
            nutriplan_shared::not_found!("Recipe not found");
        }

        let id = Ulid::new().to_string();
        repository::create_entry(&self.write_db, id.to_owned(), plan.id, input.recipe_id).await?;

        let Some(entry) = repository::find_entries(&self.write_db, EntryFilter::Id(id))
            .await?
            .into_iter()
            .next()
        else {
            nutriplan_shared::bail!("Plan entry missing after insert");
        };

        Ok(entry.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_entry(&self, user_id: &str, entry_id: &str) -> nutriplan_shared::Result<()> {
        let deleted =
            repository::delete_entry(&self.write_db, entry_id.to_owned(), user_id.to_owned())
                .await?;

        if !deleted {
            nutriplan_shared::not_found!("Plan entry not found");
        }

        Ok(())
    }
}

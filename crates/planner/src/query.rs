use std::{collections::HashMap, ops::Deref};

use time::Date;

use crate::{
    CalorieDay,
    repository::{self, EntryFilter, PlanRow},
};

#[derive(Clone)]
pub struct Query(pub nutriplan_shared::State);

impl Deref for Query {
    type Target = nutriplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    /// Daily calorie totals for plans dated on or after `since`.
    pub async fn calorie_history(
        &self,
        user_id: &str,
        since: Date,
    ) -> nutriplan_shared::Result<Vec<CalorieDay>> {
        let plans = repository::find_plans(
            &self.read_db,
            user_id.to_owned(),
            Some(nutriplan_shared::day_start(since)),
        )
        .await?;

        self.totals(plans).await
    }

    pub async fn full_calorie_history(
        &self,
        user_id: &str,
    ) -> nutriplan_shared::Result<Vec<CalorieDay>> {
        let plans = repository::find_plans(&self.read_db, user_id.to_owned(), None).await?;

        self.totals(plans).await
    }

    async fn totals(&self, plans: Vec<PlanRow>) -> nutriplan_shared::Result<Vec<CalorieDay>> {
        if plans.is_empty() {
            return Ok(vec![]);
        }

        let plan_ids = plans.iter().map(|p| p.id.to_owned()).collect();
        let entries = repository::find_entries(&self.read_db, EntryFilter::Plans(plan_ids)).await?;

        let mut totals: HashMap<String, u32> = HashMap::new();
        for entry in entries {
            let total = totals.entry(entry.plan_id).or_default();
            *total = total.saturating_add(entry.kcal);
        }

        plans
            .into_iter()
            .map(|plan| {
                let date = nutriplan_shared::day_from_timestamp(plan.day)?;

                Ok(CalorieDay {
                    total_calories: totals.get(&plan.id).copied().unwrap_or_default(),
                    date: nutriplan_shared::format_day(date)?,
                })
            })
            .collect()
    }
}

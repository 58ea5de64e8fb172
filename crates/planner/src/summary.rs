use std::collections::HashMap;

use nutriplan_recipe::RecipeRow;
use serde::{Deserialize, Serialize};

use crate::PlanEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGroup {
    pub recipe: RecipeRow,
    pub count: u32,
    pub plan_entry_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_calories: u32,
    pub calorie_goal: u32,
    pub remaining_calories: u32,
    pub is_over_goal: bool,
    pub groups: Vec<RecipeGroup>,
}

pub fn total_calories(entries: &[PlanEntry]) -> u32 {
    entries
        .iter()
        .fold(0u32, |total, entry| total.saturating_add(entry.recipe.kcal))
}

/// Calorie total and recipe groups, in one pass over the entries.
fn tally(entries: &[PlanEntry]) -> (u32, Vec<RecipeGroup>) {
    let mut total = 0u32;
    let mut groups: Vec<RecipeGroup> = vec![];
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        total = total.saturating_add(entry.recipe.kcal);

        match positions.get(entry.recipe_id.as_str()) {
            Some(&position) => {
                let group = &mut groups[position];
                group.count += 1;
                group.plan_entry_ids.push(entry.id.to_owned());
            }
            None => {
                positions.insert(entry.recipe_id.as_str(), groups.len());
                groups.push(RecipeGroup {
                    recipe: entry.recipe.clone(),
                    count: 1,
                    plan_entry_ids: vec![entry.id.to_owned()],
                });
            }
        }
    }

    (total, groups)
}

/// Groups entries by recipe in first-appearance order.
pub fn group_by_recipe(entries: &[PlanEntry]) -> Vec<RecipeGroup> {
    tally(entries).1
}

pub fn summarize(entries: &[PlanEntry], calorie_goal: u32) -> PlanSummary {
    let (total_calories, groups) = tally(entries);

    PlanSummary {
        total_calories,
        calorie_goal,
        remaining_calories: calorie_goal.saturating_sub(total_calories),
        is_over_goal: total_calories > calorie_goal,
        groups,
    }
}

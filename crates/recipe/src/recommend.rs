use std::cmp::Reverse;

use crate::Recipe;

fn matches(ingredient: &str, pantry: &[String]) -> bool {
    let ingredient = ingredient.to_lowercase();

    pantry.iter().any(|item| {
        let item = item.to_lowercase();
        !item.is_empty() && (ingredient.contains(&item) || item.contains(&ingredient))
    })
}

/// Orders recipes by pantry matches (most first), then fewest missing
/// ingredients, then title.
pub fn rank_by_pantry(recipes: Vec<Recipe>, pantry: &[String]) -> Vec<Recipe> {
    let mut scored = recipes
        .into_iter()
        .map(|recipe| {
            let matched = recipe
                .ingredients
                .iter()
                .filter(|i| matches(&i.name, pantry))
                .count();
            let missing = recipe.ingredients.len() - matched;

            ((Reverse(matched), missing, recipe.row.title.to_lowercase()), recipe)
        })
        .collect::<Vec<_>>();

    scored.sort_by(|a, b| a.0.cmp(&b.0));
    scored.into_iter().map(|(_, recipe)| recipe).collect()
}

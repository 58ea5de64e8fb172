use nutriplan_planner::{PlanEntry, PlanSummary, RecipeGroup};
use nutriplan_recipe::Recipe;

use crate::{ApiClient, ClientError, Profile, RegisterRequest, Result, image_url};

/// The signed-in user. Hands out clients authenticated as that user.
#[derive(Debug, Clone)]
pub struct SessionStore {
    client: ApiClient,
    profile: Option<Profile>,
}

impl SessionStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: client.anonymous(),
            profile: None,
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Profile> {
        let profile = self.client.login(email, password).await?;

        Ok(&*self.profile.insert(profile))
    }

    /// Registers and signs in as the new user.
    pub async fn register(&mut self, input: &RegisterRequest) -> Result<&Profile> {
        let profile = self.client.register(input).await?;

        Ok(&*self.profile.insert(profile))
    }

    /// Reloads the profile from the API after it changed elsewhere.
    pub async fn refresh(&mut self) -> Result<&Profile> {
        let profile = self.api().me().await?;

        Ok(&*self.profile.insert(profile))
    }

    pub fn logout(&mut self) {
        self.profile = None;
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.id.as_str())
    }

    /// A client for the current user, anonymous when signed out.
    pub fn api(&self) -> ApiClient {
        match self.user_id() {
            Some(user_id) => self.client.authenticated(user_id),
            None => self.client.anonymous(),
        }
    }
}

/// Today's plan as last loaded from the API.
#[derive(Debug, Clone)]
pub struct PlannerStore {
    pub plan_id: Option<String>,
    pub entries: Vec<PlanEntry>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for PlannerStore {
    fn default() -> Self {
        Self {
            plan_id: None,
            entries: vec![],
            is_loading: true,
            error: None,
        }
    }
}

impl PlannerStore {
    pub async fn fetch_planner(&mut self, api: &ApiClient) {
        if api.user_id().is_none() {
            self.is_loading = false;
            self.error = Some(ClientError::Unauthenticated.to_string());
            return;
        }

        self.is_loading = true;
        self.error = None;

        match api.today().await {
            Ok(plan) => {
                self.plan_id = Some(plan.id);
                self.entries = plan.entries;
            }
            Err(err) => {
                tracing::error!(%err, "failed to load the planner");
                self.error = Some("Could not load the planner.".to_owned());
            }
        }

        self.is_loading = false;
    }

    /// Adds a recipe to the loaded plan and appends the new entry.
    pub async fn add_recipe(&mut self, api: &ApiClient, recipe_id: &str) -> Result<&PlanEntry> {
        if api.user_id().is_none() {
            return Err(ClientError::Unauthenticated);
        }

        let Some(plan_id) = self.plan_id.as_deref() else {
            return Err(ClientError::NoPlan);
        };

        let entry = api.add_entry(plan_id, recipe_id).await?;
        self.entries.push(entry);

        self.entries.last().ok_or(ClientError::NoPlan)
    }

    /// Deletes an entry, dropping it locally only once the API confirmed.
    pub async fn remove_recipe(&mut self, api: &ApiClient, entry_id: &str) -> Result<()> {
        if api.user_id().is_none() {
            return Err(ClientError::Unauthenticated);
        }

        api.remove_entry(entry_id).await?;
        self.entries.retain(|entry| entry.id != entry_id);

        Ok(())
    }

    pub fn total_calories(&self) -> u32 {
        nutriplan_planner::total_calories(&self.entries)
    }

    pub fn grouped(&self) -> Vec<RecipeGroup> {
        nutriplan_planner::group_by_recipe(&self.entries)
    }

    pub fn summary(&self, calorie_goal: u32) -> PlanSummary {
        nutriplan_planner::summarize(&self.entries, calorie_goal)
    }
}

/// Ingredient search results, with image fields resolved to URLs.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    pub recipes: Vec<Recipe>,
    pub is_loading: bool,
    assets_base: String,
}

impl RecipeStore {
    pub fn new(assets_base: impl Into<String>) -> Self {
        Self {
            assets_base: assets_base.into(),
            ..Default::default()
        }
    }

    pub async fn search_recipes(&mut self, api: &ApiClient, ingredient: &str) {
        let term = ingredient.trim().to_lowercase();

        self.is_loading = true;
        self.recipes.clear();

        if term.is_empty() {
            self.is_loading = false;
            return;
        }

        match api.search_recipes(&term).await {
            Ok(recipes) => {
                self.recipes = recipes
                    .into_iter()
                    .map(|mut recipe| {
                        let url = image_url(
                            recipe.row.image.as_deref(),
                            &recipe.row.title,
                            &self.assets_base,
                        );
                        recipe.row.image = Some(url);
                        recipe
                    })
                    .collect();
            }
            Err(err) => {
                tracing::error!(%err, %term, "recipe search failed");
            }
        }

        self.is_loading = false;
    }

    pub fn clear_search(&mut self) {
        self.recipes.clear();
        self.is_loading = false;
    }
}

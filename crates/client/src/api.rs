use nutriplan_planner::{CalorieDay, DailyPlan, PlanEntry, PlanSummary};
use nutriplan_recipe::Recipe;
use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    ClientError, Result,
    types::{ErrorBody, Profile, RegisterRequest, UpdateProfileRequest},
};

pub const USER_ID_HEADER: &str = "X-User-ID";

/// HTTP client for the nutriplan API. When a user id is set every request
/// carries it in the `X-User-ID` header.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
    user_id: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(inner: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            inner,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            user_id: None,
        }
    }

    /// A copy of this client acting as `user_id`.
    pub fn authenticated(&self, user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..self.clone()
        }
    }

    pub fn anonymous(&self) -> Self {
        Self {
            user_id: None,
            ..self.clone()
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .inner
            .request(method, format!("{}{path}", self.base_url));

        match &self.user_id {
            Some(user_id) => builder.header(USER_ID_HEADER, user_id),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_owned(),
        };

        tracing::debug!(status = status.as_u16(), %message, "api request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
        Ok(Self::send(builder).await?.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Self::json(self.request(Method::GET, path)).await
    }

    async fn body<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        Self::json(self.request(method, path).json(body)).await
    }

    pub async fn register(&self, input: &RegisterRequest) -> Result<Profile> {
        self.body(Method::POST, "/api/register", input).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Profile> {
        #[derive(Serialize)]
        struct Login<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.body(Method::POST, "/api/login", &Login { email, password })
            .await
    }

    pub async fn recipes(&self) -> Result<Vec<Recipe>> {
        self.get("/api/recipes").await
    }

    pub async fn search_recipes(&self, ingredient: &str) -> Result<Vec<Recipe>> {
        let builder = self
            .request(Method::GET, "/api/recipes/search")
            .query(&[("ingredient", ingredient)]);

        Self::json(builder).await
    }

    pub async fn recipe(&self, id: &str) -> Result<Recipe> {
        self.get(&format!("/api/recipes/{}", urlencoding::encode(id)))
            .await
    }

    pub async fn unique_ingredients(&self) -> Result<Vec<String>> {
        self.get("/api/ingredients/unique").await
    }

    pub async fn today(&self) -> Result<DailyPlan> {
        self.get("/api/planner/today").await
    }

    pub async fn today_summary(&self) -> Result<PlanSummary> {
        self.get("/api/planner/today/summary").await
    }

    pub async fn add_entry(&self, plan_id: &str, recipe_id: &str) -> Result<PlanEntry> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AddEntry<'a> {
            plan_id: &'a str,
            recipe_id: &'a str,
        }

        self.body(
            Method::POST,
            "/api/planner/entries",
            &AddEntry { plan_id, recipe_id },
        )
        .await
    }

    pub async fn remove_entry(&self, entry_id: &str) -> Result<()> {
        let path = format!("/api/planner/entries/{}", urlencoding::encode(entry_id));
        Self::send(self.request(Method::DELETE, &path)).await?;

        Ok(())
    }

    pub async fn me(&self) -> Result<Profile> {
        self.get("/api/users/me").await
    }

    pub async fn update_profile(&self, input: &UpdateProfileRequest) -> Result<Profile> {
        self.body(Method::PUT, "/api/users/me", input).await
    }

    pub async fn update_pantry(&self, pantry: &[String]) -> Result<Profile> {
        #[derive(Serialize)]
        struct Pantry<'a> {
            pantry: &'a [String],
        }

        self.body(Method::PUT, "/api/users/me/pantry", &Pantry { pantry })
            .await
    }

    pub async fn calorie_history(&self) -> Result<Vec<CalorieDay>> {
        self.get("/api/users/me/calorie-history").await
    }

    pub async fn full_calorie_history(&self) -> Result<Vec<CalorieDay>> {
        self.get("/api/users/me/full-calorie-history").await
    }

    pub async fn recommended_recipes(&self, count: Option<u16>) -> Result<Vec<Recipe>> {
        let mut builder = self.request(Method::GET, "/api/users/me/recommended-recipes");
        if let Some(count) = count {
            builder = builder.query(&[("count", count)]);
        }

        Self::json(builder).await
    }
}

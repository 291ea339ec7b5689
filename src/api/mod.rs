mod http;

pub use http::HttpRecipeApi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Minimal recipe fields returned by a search query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(alias = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "publisher")]
    pub author: String,
    #[serde(default, alias = "image_url")]
    pub image: String,
}

/// Full recipe body as served by `/recipe/<id>`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeData {
    pub title: String,
    #[serde(default, alias = "publisher")]
    pub author: String,
    #[serde(default, alias = "image_url")]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default, alias = "source_url")]
    pub source_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
}

/// Some deployments wrap the recipe in a `recipe` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RecipeResponse {
    Wrapped { recipe: RecipeData },
    Bare(RecipeData),
}

impl From<RecipeResponse> for RecipeData {
    fn from(response: RecipeResponse) -> Self {
        match response {
            RecipeResponse::Wrapped { recipe } => recipe,
            RecipeResponse::Bare(recipe) => recipe,
        }
    }
}

/// Source of recipe data
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Summaries of recipes matching `query`, in API order
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError>;

    /// The full recipe with identifier `id`
    async fn recipe(&self, id: &str) -> Result<RecipeData, FetchError>;
}

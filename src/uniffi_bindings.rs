//! UniFFI bindings for recipe-finder
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{AppError, Ingredient, Recipe, RecipeSummary};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible parsed ingredient
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    /// Amount, absent when the line has no leading quantity
    pub count: Option<f64>,
    /// Canonical unit (empty string if none)
    pub unit: String,
    pub ingredient: String,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            count: ingredient.count,
            unit: ingredient.unit,
            ingredient: ingredient.ingredient,
        }
    }
}

/// FFI-compatible search result entry
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

impl From<RecipeSummary> for FfiRecipeSummary {
    fn from(summary: RecipeSummary) -> Self {
        FfiRecipeSummary {
            id: summary.id,
            title: summary.title,
            author: summary.author,
            image: summary.image,
        }
    }
}

/// FFI-compatible recipe with ingredients scaled to `servings`
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    pub servings: u32,
    pub ingredients: Vec<FfiIngredient>,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            servings: recipe.servings(),
            id: recipe.id,
            title: recipe.title,
            author: recipe.author,
            image: recipe.image,
            source_url: recipe.source_url,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiError {
    /// Search or recipe loading failed
    FetchError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiError {}

impl From<AppError> for FfiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Fetch(e) => FfiError::FetchError {
                message: e.to_string(),
            },
            AppError::NotFound(id) => FfiError::InvalidInput {
                message: format!("No list item with id {}", id),
            },
            AppError::Builder(msg) => FfiError::InvalidInput { message: msg },
            AppError::Config(e) => FfiError::ConfigError {
                message: e.to_string(),
            },
            AppError::Storage(e) => FfiError::RuntimeError {
                message: e.to_string(),
            },
            AppError::Serialize(e) => FfiError::RuntimeError {
                message: e.to_string(),
            },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Parse one ingredient line into count, unit and name
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_ingredient_line(line: String) -> FfiIngredient {
    crate::parse_ingredient(&line).into()
}

/// Search recipes
///
/// # Arguments
/// * `base_url` - Base URL of the recipe API
/// * `query` - Search words
/// * `timeout_seconds` - Optional timeout in seconds
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn find_recipes(
    base_url: String,
    query: String,
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiRecipeSummary>, FfiError> {
    if query.trim().is_empty() {
        return Err(FfiError::InvalidInput {
            message: "Search query cannot be empty".to_string(),
        });
    }

    let rt = create_runtime()?;
    rt.block_on(async {
        let timeout = timeout_seconds.map(Duration::from_secs);
        let search = crate::search_recipes(&base_url, &query, timeout).await?;
        Ok(search.results.into_iter().map(Into::into).collect())
    })
}

/// Load a recipe, optionally scaled to `servings`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn fetch_recipe(
    base_url: String,
    id: String,
    servings: Option<u32>,
    timeout_seconds: Option<u64>,
) -> Result<FfiRecipe, FfiError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let timeout = timeout_seconds.map(Duration::from_secs);
        let mut recipe = crate::load_recipe(&base_url, &id, timeout).await?;
        if let Some(servings) = servings {
            recipe.set_servings(servings);
        }
        Ok(recipe.into())
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

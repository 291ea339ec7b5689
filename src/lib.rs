pub mod api;
pub mod app;
pub mod builder;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod render;
pub mod shell;
pub mod storage;

// UniFFI bindings (only compiled when uniffi feature is enabled)
#[cfg(feature = "uniffi")]
pub mod uniffi_bindings;

// Re-export the main types for convenience
pub use api::{HttpRecipeApi, RecipeApi, RecipeData, RecipeSummary};
pub use app::{App, Command, PendingRequest, RequestKind, Settings, Ticket, ViewUpdate};
pub use builder::{AppBuilder, StorageTarget};
pub use config::AppConfig;
pub use error::{AppError, FetchError};
pub use ingredients::{parse_ingredient, Ingredient};
pub use model::{
    ItemId, Like, Likes, Recipe, ResultsPage, Search, ServingsDirection, ShoppingItem,
    ShoppingList,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Re-export UniFFI scaffolding when feature is enabled
#[cfg(feature = "uniffi")]
pub use uniffi_bindings::*;

use std::time::Duration;

/// Search the API at `base_url` for `query`
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let search = recipe_finder::search_recipes("http://localhost:3000/api", "pizza", None).await?;
/// for summary in search.paginate(0, 10) {
///     println!("{}", summary.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(
    base_url: &str,
    query: &str,
    timeout: Option<Duration>,
) -> Result<Search, AppError> {
    let api = HttpRecipeApi::new(base_url, timeout)?;
    Ok(Search::fetch(&api, query).await?)
}

/// Load and parse recipe `id` from the API at `base_url`
pub async fn load_recipe(
    base_url: &str,
    id: &str,
    timeout: Option<Duration>,
) -> Result<Recipe, AppError> {
    let api = HttpRecipeApi::new(base_url, timeout)?;
    Ok(Recipe::fetch(&api, id).await?)
}

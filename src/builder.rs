use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{HttpRecipeApi, RecipeApi};
use crate::app::{App, Settings};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::Likes;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

/// Where favorites are kept
#[derive(Debug, Clone, Default)]
pub enum StorageTarget {
    /// Nothing survives the process (default)
    #[default]
    Memory,
    /// JSON blobs inside a directory
    Directory(PathBuf),
}

/// Builder for configuring an [`App`]
#[derive(Default)]
pub struct AppBuilder {
    api: Option<Arc<dyn RecipeApi>>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    storage: StorageTarget,
    store: Option<Box<dyn KeyValueStore>>,
    page_size: Option<usize>,
    minutes_per_ingredient: Option<u32>,
}

impl AppBuilder {
    /// Start from loaded configuration; later calls override it
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{App, AppConfig};
    ///
    /// let builder = App::builder().config(&AppConfig::default());
    /// ```
    pub fn config(self, config: &AppConfig) -> Self {
        self.base_url(config.api.base_url.clone())
            .timeout(Duration::from_secs(config.api.timeout))
            .page_size(config.search.page_size)
            .minutes_per_ingredient(config.recipe.minutes_per_ingredient)
            .storage_dir(config.storage.dir.clone())
    }

    /// Base URL of the recipe API
    ///
    /// # Example
    /// ```
    /// use recipe_finder::App;
    ///
    /// let builder = App::builder().base_url("https://recipes.example.com/api");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a custom [`RecipeApi`] instead of the HTTP client
    pub fn api(mut self, api: Arc<dyn RecipeApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Persist favorites as JSON files under `dir`
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage = StorageTarget::Directory(dir.into());
        self
    }

    /// Keep favorites in memory only
    pub fn in_memory(mut self) -> Self {
        self.storage = StorageTarget::Memory;
        self.store = None;
        self
    }

    /// Use a custom [`KeyValueStore`]; takes precedence over the storage target
    pub fn store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Search results per page
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Minutes per ingredient used by the prep time estimate
    pub fn minutes_per_ingredient(mut self, minutes: u32) -> Self {
        self.minutes_per_ingredient = Some(minutes);
        self
    }

    /// Assemble the application and load the stored favorites
    ///
    /// # Errors
    /// Returns `AppError` if:
    /// - Neither an API nor a base URL was given
    /// - The page size is zero
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<App, AppError> {
        let defaults = AppConfig::default();

        let api: Arc<dyn RecipeApi> = match (self.api, self.base_url) {
            (Some(api), _) => api,
            (None, Some(url)) => Arc::new(HttpRecipeApi::new(url, self.timeout)?),
            (None, None) => {
                return Err(AppError::Builder(
                    "No recipe API specified. Use .base_url() or .api()".to_string(),
                ))
            }
        };

        let page_size = self.page_size.unwrap_or(defaults.search.page_size);
        if page_size == 0 {
            return Err(AppError::Builder("Page size must be at least 1".to_string()));
        }

        let store: Box<dyn KeyValueStore> = match (self.store, self.storage) {
            (Some(store), _) => store,
            (None, StorageTarget::Memory) => Box::new(MemoryStore::new()),
            (None, StorageTarget::Directory(dir)) => Box::new(FileStore::new(dir)),
        };

        let settings = Settings {
            page_size,
            minutes_per_ingredient: self
                .minutes_per_ingredient
                .unwrap_or(defaults.recipe.minutes_per_ingredient),
        };

        let mut likes = Likes::new(store);
        likes.restore();
        Ok(App::new(api, settings, likes))
    }
}

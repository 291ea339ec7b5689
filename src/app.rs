//! Application state and the command dispatcher.
//!
//! [`App`] is the single owner of everything a session mutates. Front-ends
//! translate user input into [`Command`]s, hand them to [`App::dispatch`] and
//! render the [`ViewUpdate`]s that come back.

use log::{debug, info, warn};
use std::sync::Arc;

use crate::api::RecipeApi;
use crate::builder::AppBuilder;
use crate::error::AppError;
use crate::model::{
    ItemId, Like, Likes, Recipe, ResultsPage, Search, ServingsDirection, ShoppingItem,
    ShoppingList,
};

/// Everything a user can ask the application to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Session start: show the favorites loaded at build time
    PageLoaded,
    SearchSubmitted(String),
    /// Show another page of the current results (zero-based)
    PageRequested(usize),
    RecipeSelected(String),
    ServingsChanged(ServingsDirection),
    /// Add every ingredient of the current recipe to the shopping list
    AddRecipeToList,
    ListItemDeleted(ItemId),
    ListItemCountChanged(ItemId, Option<f64>),
    /// Like the current recipe, or unlike it if already liked
    LikeToggled,
}

/// What the presentation layer has to redraw
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    SearchResults(ResultsPage),
    HighlightSelected(String),
    RecipeRendered { recipe: Recipe, liked: bool },
    ServingsUpdated(Recipe),
    ListItemsAdded(Vec<ShoppingItem>),
    ListItemRemoved(ItemId),
    ListItemUpdated(ShoppingItem),
    LikeAdded(Like),
    LikeRemoved(String),
    /// Whether the like button of the shown recipe is filled
    LikeButton(bool),
    /// Whether the favorites menu has anything to show
    LikesMenu(bool),
    LikesRestored(Vec<Like>),
    /// Something failed; show a generic message
    Notification(String),
}

/// Which kind of in-flight request a ticket belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Search,
    Recipe,
}

/// Identifies one in-flight request; only the newest ticket of a kind is honoured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    kind: RequestKind,
    generation: u64,
}

impl Ticket {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// A request handed out by [`App::begin_search`] / [`App::begin_recipe`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: Ticket,
    /// Query or recipe id
    pub target: String,
}

/// Tunables the controller needs at dispatch time
#[derive(Debug, Clone)]
pub struct Settings {
    pub page_size: usize,
    pub minutes_per_ingredient: u32,
}

pub struct App {
    api: Arc<dyn RecipeApi>,
    settings: Settings,
    search: Option<Search>,
    recipe: Option<Recipe>,
    list: Option<ShoppingList>,
    likes: Likes,
    search_generation: u64,
    recipe_generation: u64,
}

const SEARCH_FAILED: &str = "Something went wrong with the search!";
const RECIPE_FAILED: &str = "Error processing recipe!";

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    pub(crate) fn new(api: Arc<dyn RecipeApi>, settings: Settings, likes: Likes) -> Self {
        App {
            api,
            settings,
            search: None,
            recipe: None,
            list: None,
            likes,
            search_generation: 0,
            recipe_generation: 0,
        }
    }

    /// Handle one command to completion, awaiting any fetch inline
    pub async fn dispatch(&mut self, command: Command) -> Vec<ViewUpdate> {
        debug!("dispatch {:?}", command);
        match command {
            Command::PageLoaded => self.show_likes(),
            Command::SearchSubmitted(query) => {
                let Some(request) = self.begin_search(&query) else {
                    return Vec::new();
                };
                let result = Search::fetch(self.api.as_ref(), &request.target).await;
                self.complete_search(request.ticket, result.map_err(AppError::from))
            }
            Command::PageRequested(page) => self.show_page(page),
            Command::RecipeSelected(id) => {
                let Some(request) = self.begin_recipe(&id) else {
                    return Vec::new();
                };
                let result = Recipe::fetch(self.api.as_ref(), &request.target).await;
                self.complete_recipe(request.ticket, result.map_err(AppError::from))
            }
            Command::ServingsChanged(direction) => self.change_servings(direction),
            Command::AddRecipeToList => self.add_recipe_to_list(),
            Command::ListItemDeleted(id) => self.delete_list_item(id),
            Command::ListItemCountChanged(id, count) => self.update_list_count(id, count),
            Command::LikeToggled => self.toggle_like(),
        }
    }

    /// Start a search; `None` for a blank query
    pub fn begin_search(&mut self, query: &str) -> Option<PendingRequest> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.search_generation += 1;
        Some(PendingRequest {
            ticket: Ticket {
                kind: RequestKind::Search,
                generation: self.search_generation,
            },
            target: query.to_string(),
        })
    }

    /// Apply a finished search unless a newer one has started since
    pub fn complete_search(
        &mut self,
        ticket: Ticket,
        result: Result<Search, AppError>,
    ) -> Vec<ViewUpdate> {
        if !self.is_current(ticket) {
            debug!("dropping stale search result {:?}", ticket);
            return Vec::new();
        }

        match result {
            Ok(search) => {
                info!("search {:?}: {} results", search.query, search.results.len());
                let page = search.page(0, self.settings.page_size);
                self.search = Some(search);
                vec![ViewUpdate::SearchResults(page)]
            }
            Err(e) => {
                warn!("search failed: {}", e);
                vec![ViewUpdate::Notification(SEARCH_FAILED.to_string())]
            }
        }
    }

    /// Start loading a recipe; `None` for a blank id
    pub fn begin_recipe(&mut self, id: &str) -> Option<PendingRequest> {
        let id = id.trim().trim_start_matches('#');
        if id.is_empty() {
            return None;
        }
        self.recipe_generation += 1;
        Some(PendingRequest {
            ticket: Ticket {
                kind: RequestKind::Recipe,
                generation: self.recipe_generation,
            },
            target: id.to_string(),
        })
    }

    /// Apply a loaded recipe unless a newer load has started since
    pub fn complete_recipe(
        &mut self,
        ticket: Ticket,
        result: Result<Recipe, AppError>,
    ) -> Vec<ViewUpdate> {
        if !self.is_current(ticket) {
            debug!("dropping stale recipe result {:?}", ticket);
            return Vec::new();
        }

        match result {
            Ok(recipe) => {
                info!("showing recipe {} ({})", recipe.id, recipe.title);
                let mut updates = Vec::new();
                if self.search.as_ref().is_some_and(|search| search.contains(&recipe.id)) {
                    updates.push(ViewUpdate::HighlightSelected(recipe.id.clone()));
                }
                updates.push(ViewUpdate::RecipeRendered {
                    liked: self.likes.is_liked(&recipe.id),
                    recipe: recipe.clone(),
                });
                self.recipe = Some(recipe);
                updates
            }
            Err(e) => {
                warn!("loading recipe failed: {}", e);
                vec![ViewUpdate::Notification(RECIPE_FAILED.to_string())]
            }
        }
    }

    /// Shared handle to the API, for callers that run fetches themselves
    pub fn api(&self) -> Arc<dyn RecipeApi> {
        Arc::clone(&self.api)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn recipe_mut(&mut self) -> Option<&mut Recipe> {
        self.recipe.as_mut()
    }

    pub fn list(&self) -> Option<&ShoppingList> {
        self.list.as_ref()
    }

    pub fn likes(&self) -> &Likes {
        &self.likes
    }

    /// Prep time of the current recipe with the configured factor
    pub fn prep_time(&self) -> Option<u32> {
        self.recipe
            .as_ref()
            .map(|recipe| recipe.prep_time(self.settings.minutes_per_ingredient))
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        let latest = match ticket.kind {
            RequestKind::Search => self.search_generation,
            RequestKind::Recipe => self.recipe_generation,
        };
        ticket.generation == latest
    }

    fn show_likes(&self) -> Vec<ViewUpdate> {
        vec![
            ViewUpdate::LikesRestored(self.likes.likes().to_vec()),
            ViewUpdate::LikesMenu(self.likes.count() > 0),
        ]
    }

    fn show_page(&self, page: usize) -> Vec<ViewUpdate> {
        match &self.search {
            Some(search) => vec![ViewUpdate::SearchResults(
                search.page(page, self.settings.page_size),
            )],
            None => Vec::new(),
        }
    }

    fn change_servings(&mut self, direction: ServingsDirection) -> Vec<ViewUpdate> {
        let Some(recipe) = &mut self.recipe else {
            return Vec::new();
        };
        if recipe.update_servings(direction) {
            vec![ViewUpdate::ServingsUpdated(recipe.clone())]
        } else {
            Vec::new()
        }
    }

    fn add_recipe_to_list(&mut self) -> Vec<ViewUpdate> {
        let Some(recipe) = &self.recipe else {
            return Vec::new();
        };
        let list = self.list.get_or_insert_with(ShoppingList::new);

        let added: Vec<ShoppingItem> = recipe
            .ingredients
            .iter()
            .map(|ingredient| {
                list.add_item(
                    ingredient.count,
                    ingredient.unit.clone(),
                    ingredient.ingredient.clone(),
                )
            })
            .collect();
        debug!("added {} items to the shopping list", added.len());
        vec![ViewUpdate::ListItemsAdded(added)]
    }

    fn delete_list_item(&mut self, id: ItemId) -> Vec<ViewUpdate> {
        let result = match &mut self.list {
            Some(list) => list.delete_item(id).map(|_| ()),
            None => Err(AppError::NotFound(id)),
        };
        match result {
            Ok(()) => vec![ViewUpdate::ListItemRemoved(id)],
            Err(e) => {
                debug!("ignoring delete: {}", e);
                Vec::new()
            }
        }
    }

    fn update_list_count(&mut self, id: ItemId, count: Option<f64>) -> Vec<ViewUpdate> {
        let result = match &mut self.list {
            Some(list) => list.update_count(id, count).map(|item| item.clone()),
            None => Err(AppError::NotFound(id)),
        };
        match result {
            Ok(item) => vec![ViewUpdate::ListItemUpdated(item)],
            Err(e) => {
                debug!("ignoring count update: {}", e);
                Vec::new()
            }
        }
    }

    fn toggle_like(&mut self) -> Vec<ViewUpdate> {
        let Some(recipe) = &self.recipe else {
            return Vec::new();
        };

        let mut updates = if self.likes.is_liked(&recipe.id) {
            self.likes.delete_like(&recipe.id);
            vec![
                ViewUpdate::LikeButton(false),
                ViewUpdate::LikeRemoved(recipe.id.clone()),
            ]
        } else {
            let like = self
                .likes
                .add_like(
                    recipe.id.clone(),
                    recipe.title.clone(),
                    recipe.author.clone(),
                    recipe.image.clone(),
                )
                .clone();
            vec![ViewUpdate::LikeButton(true), ViewUpdate::LikeAdded(like)]
        };
        updates.push(ViewUpdate::LikesMenu(self.likes.count() > 0));
        updates
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("settings", &self.settings)
            .field("search", &self.search)
            .field("recipe", &self.recipe)
            .field("list", &self.list)
            .field("likes", &self.likes)
            .finish_non_exhaustive()
    }
}

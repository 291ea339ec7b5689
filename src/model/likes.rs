use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized favorites
pub const LIKES_KEY: &str = "likes";

/// A favorite recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

/// Favorites, written through to a [`KeyValueStore`] on every change
pub struct Likes {
    likes: Vec<Like>,
    store: Box<dyn KeyValueStore>,
}

impl Likes {
    /// Empty collection over `store`; call [`restore`](Self::restore) to load it
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Likes {
            likes: Vec::new(),
            store,
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    /// Add a like; liking an already liked recipe returns the existing entry
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        image: impl Into<String>,
    ) -> &Like {
        let id = id.into();
        if let Some(index) = self.likes.iter().position(|like| like.id == id) {
            debug!("recipe {} already liked", id);
            return &self.likes[index];
        }

        self.likes.push(Like {
            id,
            title: title.into(),
            author: author.into(),
            image: image.into(),
        });
        self.persist_or_warn();
        &self.likes[self.likes.len() - 1]
    }

    /// Remove the like for `id`, returning it if it existed
    pub fn delete_like(&mut self, id: &str) -> Option<Like> {
        let index = self.likes.iter().position(|like| like.id == id)?;
        let removed = self.likes.remove(index);
        self.persist_or_warn();
        Some(removed)
    }

    pub fn count(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    /// Write the whole collection under [`LIKES_KEY`]
    pub fn persist(&mut self) -> Result<(), AppError> {
        let blob = serde_json::to_string(&self.likes)?;
        self.store.set(LIKES_KEY, &blob)
    }

    /// Replace the collection with the stored one.
    ///
    /// A missing, unreadable or corrupt blob yields an empty collection.
    pub fn restore(&mut self) {
        self.likes = match self.store.get(LIKES_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                warn!("ignoring corrupt favorites blob: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read favorites: {}", e);
                Vec::new()
            }
        };
        debug!("restored {} likes", self.likes.len());
    }

    fn persist_or_warn(&mut self) {
        if let Err(e) = self.persist() {
            warn!("failed to persist favorites: {}", e);
        }
    }
}

impl std::fmt::Debug for Likes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Likes").field("likes", &self.likes).finish()
    }
}

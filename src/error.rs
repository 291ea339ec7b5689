use thiserror::Error;

use crate::model::ItemId;

/// Failures talking to the recipe API
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Request to {url} returned status {status}")]
    Status { status: u16, url: String },

    /// The body was not the JSON shape we expect
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be combined with the request path
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur while driving the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Search or recipe loading failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// No shopping list item carries this identifier
    #[error("No list item with id {0}")]
    NotFound(ItemId),

    /// Reading or writing the key-value store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Favorites could not be serialized for storage
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

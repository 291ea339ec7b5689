mod likes;
mod list;
mod recipe;
mod search;

pub use likes::{Like, Likes, LIKES_KEY};
pub use list::{ItemId, ShoppingItem, ShoppingList};
pub use recipe::{Recipe, ServingsDirection, DEFAULT_SERVINGS};
pub use search::{ResultsPage, Search};

/// Decodes HTML entities the API leaves in titles (`Mac &amp; Cheese`)
pub(crate) fn decode_title(title: &str) -> String {
    html_escape::decode_html_entities(title).trim().to_string()
}

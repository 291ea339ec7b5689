//! Plain-text rendering of [`ViewUpdate`]s for the terminal front-end.

use std::fmt::Write;

use crate::api::RecipeSummary;
use crate::app::ViewUpdate;
use crate::model::{Recipe, ResultsPage, ShoppingItem};

/// Titles in result lists are cut at a word boundary after this many characters
pub const TITLE_LIMIT: usize = 17;

/// Denominators tried when printing a count as a fraction
const DENOMINATORS: &[u32] = &[2, 3, 4, 8];

/// Shortens `title` to whole words totalling at most `limit` characters.
///
/// The first word is always kept, however long.
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;
    for word in title.split_whitespace() {
        let word_len = word.chars().count();
        if !kept.is_empty() && length + word_len > limit {
            break;
        }
        length += word_len;
        kept.push(word);
    }
    format!("{} ...", kept.join(" "))
}

/// Human-friendly count: `2`, `1 1/2`, `1/3`, or two decimals when no simple fraction fits.
pub fn format_count(count: Option<f64>) -> String {
    let Some(count) = count else {
        return "?".to_string();
    };

    let whole = count.trunc();
    let rest = count - whole;
    if rest < 0.01 || rest > 0.99 {
        return format!("{}", count.round() as i64);
    }

    for &denominator in DENOMINATORS {
        let numerator = (rest * f64::from(denominator)).round();
        if numerator >= 1.0
            && numerator < f64::from(denominator)
            && (numerator / f64::from(denominator) - rest).abs() < 0.01
        {
            let fraction = format!("{}/{}", numerator as i64, denominator);
            return if whole == 0.0 {
                fraction
            } else {
                format!("{} {}", whole as i64, fraction)
            };
        }
    }

    format!("{:.2}", count)
}

/// Renders updates as text blocks
#[derive(Debug, Clone)]
pub struct TextView {
    pub minutes_per_ingredient: u32,
}

impl TextView {
    pub fn render(&self, update: &ViewUpdate) -> String {
        match update {
            ViewUpdate::SearchResults(page) => render_page(page),
            ViewUpdate::HighlightSelected(id) => format!("> selected {}", id),
            ViewUpdate::RecipeRendered { recipe, liked } => self.render_recipe(recipe, *liked),
            ViewUpdate::ServingsUpdated(recipe) => {
                let mut out = format!("Servings: {}\n", recipe.servings());
                render_ingredients(&mut out, recipe);
                out
            }
            ViewUpdate::ListItemsAdded(items) => {
                let lines: Vec<String> = items.iter().map(render_item).collect();
                format!("Shopping list:\n{}", lines.join("\n"))
            }
            ViewUpdate::ListItemRemoved(id) => format!("Removed item {}", id),
            ViewUpdate::ListItemUpdated(item) => format!("Updated {}", render_item(item)),
            ViewUpdate::LikeAdded(like) => format!("♥ {} ({})", like.title, like.author),
            ViewUpdate::LikeRemoved(id) => format!("Unliked {}", id),
            ViewUpdate::LikeButton(liked) => {
                if *liked {
                    "[♥ liked]".to_string()
                } else {
                    "[♡ like]".to_string()
                }
            }
            ViewUpdate::LikesMenu(visible) => {
                if *visible {
                    "Favorites available (use `likes`)".to_string()
                } else {
                    "No favorites yet".to_string()
                }
            }
            ViewUpdate::LikesRestored(likes) => {
                let lines: Vec<String> = likes
                    .iter()
                    .map(|like| format!("  ♥ {:<20} {} ({})", like.id, like.title, like.author))
                    .collect();
                format!("Favorites ({}):\n{}", likes.len(), lines.join("\n"))
            }
            ViewUpdate::Notification(message) => format!("! {}", message),
        }
    }

    fn render_recipe(&self, recipe: &Recipe, liked: bool) -> String {
        let mut out = String::new();
        let heart = if liked { "♥" } else { "♡" };
        let _ = writeln!(out, "{} {}", heart, recipe.title);
        let _ = writeln!(out, "by {}", recipe.author);
        let _ = writeln!(
            out,
            "{} minutes · {} servings",
            recipe.prep_time(self.minutes_per_ingredient),
            recipe.servings()
        );
        render_ingredients(&mut out, recipe);
        if !recipe.source_url.is_empty() {
            let _ = writeln!(out, "Directions: {}", recipe.source_url);
        }
        out
    }
}

fn render_page(page: &ResultsPage) -> String {
    if page.items.is_empty() {
        return "No results".to_string();
    }

    let mut out = String::new();
    for summary in &page.items {
        let _ = writeln!(out, "{}", render_summary(summary));
    }
    let _ = write!(out, "Page {} of {}", page.page + 1, page.total_pages);
    if let Some(prev) = page.prev {
        let _ = write!(out, "  [< page {}]", prev);
    }
    if let Some(next) = page.next {
        let _ = write!(out, "  [page {} >]", next);
    }
    out
}

fn render_summary(summary: &RecipeSummary) -> String {
    format!(
        "  {:<12} {:<22} {}",
        summary.id,
        limit_title(&summary.title, TITLE_LIMIT),
        summary.author
    )
}

fn render_ingredients(out: &mut String, recipe: &Recipe) {
    for ingredient in &recipe.ingredients {
        let _ = writeln!(
            out,
            "  ✓ {} {} {}",
            format_count(ingredient.count),
            ingredient.unit,
            ingredient.ingredient
        );
    }
}

/// One shopping list line: `[id] count unit name`
pub fn render_item(item: &ShoppingItem) -> String {
    format!(
        "  [{}] {} {} {}",
        item.id,
        format_count(item.count),
        item.unit,
        item.ingredient
    )
}

use log::debug;
use serde::Serialize;

use super::decode_title;
use crate::api::{RecipeApi, RecipeData};
use crate::error::FetchError;
use crate::ingredients::{parse_ingredients, Ingredient};

/// Servings assumed when the source does not state any
pub const DEFAULT_SERVINGS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsDirection {
    Increase,
    Decrease,
}

/// One recipe with ingredients scaled to the current servings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    pub ingredient_lines: Vec<String>,
    /// Parsed ingredients, counts scaled to `servings`
    pub ingredients: Vec<Ingredient>,
    servings: u32,
    base_servings: u32,
    /// Parsed ingredients at `base_servings`; the rescaling source
    #[serde(skip)]
    base_ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Load recipe `id` from the API and parse its ingredients
    pub async fn fetch(api: &dyn RecipeApi, id: &str) -> Result<Self, FetchError> {
        let data = api.recipe(id).await?;
        debug!("loaded recipe {} with {} ingredients", id, data.ingredients.len());
        Ok(Self::from_data(id, data))
    }

    pub fn from_data(id: impl Into<String>, data: RecipeData) -> Self {
        let base_servings = match data.servings {
            Some(servings) if servings > 0 => servings,
            _ => DEFAULT_SERVINGS,
        };

        let mut recipe = Recipe {
            id: id.into(),
            title: decode_title(&data.title),
            author: data.author,
            image: data.image,
            source_url: data.source_url,
            ingredient_lines: data.ingredients,
            ingredients: Vec::new(),
            servings: base_servings,
            base_servings,
            base_ingredients: Vec::new(),
        };
        recipe.parse_ingredients();
        recipe
    }

    /// Re-parse every raw line and rescale to the current servings
    pub fn parse_ingredients(&mut self) {
        self.base_ingredients = parse_ingredients(&self.ingredient_lines);
        self.rescale();
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Servings as stated by the source
    pub fn base_servings(&self) -> u32 {
        self.base_servings
    }

    /// Estimated preparation time in minutes
    pub fn prep_time(&self, minutes_per_ingredient: u32) -> u32 {
        let count = u32::try_from(self.ingredient_lines.len()).unwrap_or(u32::MAX);
        count.saturating_mul(minutes_per_ingredient)
    }

    /// Step servings by one; returns whether they changed.
    ///
    /// Decreasing stops at one serving.
    pub fn update_servings(&mut self, direction: ServingsDirection) -> bool {
        let servings = match direction {
            ServingsDirection::Increase => self.servings.saturating_add(1),
            ServingsDirection::Decrease => self.servings - 1,
        };
        self.set_servings(servings)
    }

    /// Jump to `servings`; zero is refused. Returns whether they changed.
    pub fn set_servings(&mut self, servings: u32) -> bool {
        if servings == 0 || servings == self.servings {
            return false;
        }
        self.servings = servings;
        self.rescale();
        true
    }

    /// Counts always derive from the base values so repeated steps never drift
    fn rescale(&mut self) {
        let servings = f64::from(self.servings);
        let base = f64::from(self.base_servings);
        self.ingredients = self
            .base_ingredients
            .iter()
            .map(|ingredient| Ingredient {
                count: ingredient.count.map(|count| count * servings / base),
                ..ingredient.clone()
            })
            .collect();
        debug!("recipe {} rescaled to {} servings", self.id, self.servings);
    }
}

//! Free-text ingredient line parsing.
//!
//! Turns lines such as `"1 1/2 Tablespoons olive oil"` into an [`Ingredient`]
//! with a numeric count, a canonical unit and a lower-cased name. Parsing never
//! fails: anything that cannot be read as a quantity or unit stays in the name.

mod quantity;
mod units;

use serde::{Deserialize, Serialize};

pub use self::quantity::{leading_quantity, LeadingQuantity};
pub use self::units::{canonical_unit, canonical_units};

/// How many tokens after the quantity are searched for a unit (`1 heaping tbsp`)
const UNIT_WINDOW: usize = 3;

/// One structured ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Amount, `None` when the line carries no leading quantity
    pub count: Option<f64>,
    /// Canonical unit, empty when none was recognized
    pub unit: String,
    /// Lower-cased ingredient name
    pub ingredient: String,
}

/// Parse a single ingredient line.
///
/// ```
/// use recipe_finder::ingredients::parse_ingredient;
///
/// let parsed = parse_ingredient("1/2 cup Milk");
/// assert_eq!(parsed.count, Some(0.5));
/// assert_eq!(parsed.unit, "cup");
/// assert_eq!(parsed.ingredient, "milk");
/// ```
pub fn parse_ingredient(line: &str) -> Ingredient {
    let cleaned = strip_parentheses(&line.to_lowercase());
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let quantity = leading_quantity(&tokens);
    let consumed = quantity.map_or(0, |q| q.consumed);

    let rest = tokens.get(consumed..).unwrap_or_default();
    let unit = rest
        .iter()
        .take(UNIT_WINDOW)
        .enumerate()
        .find_map(|(index, token)| canonical_unit(token).map(|unit| (index, unit)));

    let name: Vec<&str> = match unit {
        Some((index, _)) => rest[..index].iter().chain(&rest[index + 1..]).copied().collect(),
        None => rest.to_vec(),
    };

    Ingredient {
        count: quantity.map(|q| q.value),
        unit: unit.map_or("", |(_, unit)| unit).to_string(),
        ingredient: name.join(" "),
    }
}

/// Parse every line, preserving order
pub fn parse_ingredients<S: AsRef<str>>(lines: &[S]) -> Vec<Ingredient> {
    lines
        .iter()
        .map(|line| parse_ingredient(line.as_ref()))
        .collect()
}

/// Removes `( ... )` asides; an unbalanced `(` drops the rest of the line.
fn strip_parentheses(line: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '(' => {
                depth += 1;
                out.push(' ');
            }
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(count: Option<f64>, unit: &str, ingredient: &str) -> Ingredient {
        Ingredient {
            count,
            unit: unit.to_string(),
            ingredient: ingredient.to_string(),
        }
    }

    #[test]
    fn test_fraction_with_unit() {
        assert_eq!(
            parse_ingredient("1/2 cup milk"),
            parsed(Some(0.5), "cup", "milk")
        );
    }

    #[test]
    fn test_unit_synonyms_normalize() {
        for line in [
            "2 tablespoons butter",
            "2 Tbs butter",
            "2 tbsp butter",
            "2 TABLESPOON butter",
        ] {
            assert_eq!(parse_ingredient(line), parsed(Some(2.0), "tbsp", "butter"));
        }
        assert_eq!(parse_ingredient("3 teaspoons salt").unit, "tsp");
        assert_eq!(parse_ingredient("1 pound beef").unit, "pound");
        assert_eq!(parse_ingredient("8 ounces cheese").unit, "oz");
        assert_eq!(parse_ingredient("500 grams flour").unit, "g");
        assert_eq!(parse_ingredient("1 kilogram potatoes").unit, "kg");
        assert_eq!(parse_ingredient("1 liter stock").unit, "l");
        assert_eq!(parse_ingredient("250 milliliters cream").unit, "ml");
    }

    #[test]
    fn test_integer_and_decimal_counts() {
        assert_eq!(parse_ingredient("4 eggs"), parsed(Some(4.0), "", "eggs"));
        assert_eq!(
            parse_ingredient("2.5 cups flour"),
            parsed(Some(2.5), "cup", "flour")
        );
    }

    #[test]
    fn test_mixed_fraction_and_range() {
        assert_eq!(
            parse_ingredient("1 1/2 cups sugar"),
            parsed(Some(1.5), "cup", "sugar")
        );
        assert_eq!(
            parse_ingredient("1-1/2 tsp vanilla extract"),
            parsed(Some(1.5), "tsp", "vanilla extract")
        );
        assert_eq!(
            parse_ingredient("2-3 cloves garlic"),
            parsed(Some(2.0), "", "cloves garlic")
        );
    }

    #[test]
    fn test_parenthesized_asides_are_dropped() {
        assert_eq!(
            parse_ingredient("1 can (14.5 ounces) diced tomatoes"),
            parsed(Some(1.0), "", "can diced tomatoes")
        );
        assert_eq!(
            parse_ingredient("2 (8 oz) packages cream cheese"),
            parsed(Some(2.0), "", "packages cream cheese")
        );
    }

    #[test]
    fn test_unit_after_adjectives() {
        assert_eq!(
            parse_ingredient("1 heaping tablespoon sugar"),
            parsed(Some(1.0), "tbsp", "heaping sugar")
        );
        assert_eq!(
            parse_ingredient("2 large cups flour"),
            parsed(Some(2.0), "cup", "large flour")
        );
        assert_eq!(
            parse_ingredient("1 very full cup. rice"),
            parsed(Some(1.0), "cup", "very full rice")
        );
    }

    #[test]
    fn test_unit_beyond_window_stays_in_name() {
        assert_eq!(
            parse_ingredient("3 ripe red juicy tomatoes, about 1 pound"),
            parsed(Some(3.0), "", "ripe red juicy tomatoes, about 1 pound")
        );
    }

    #[test]
    fn test_unit_without_quantity() {
        assert_eq!(
            parse_ingredient("Cup of water"),
            parsed(None, "cup", "of water")
        );
    }

    #[test]
    fn test_degrades_to_full_line() {
        assert_eq!(
            parse_ingredient("Salt and Pepper to taste"),
            parsed(None, "", "salt and pepper to taste")
        );
        assert_eq!(parse_ingredient(""), parsed(None, "", ""));
        assert_eq!(parse_ingredient("   "), parsed(None, "", ""));
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(
            parse_ingredient("  3   large   eggs  "),
            parsed(Some(3.0), "", "large eggs")
        );
    }

    #[test]
    fn test_parse_ingredients_preserves_order() {
        let lines = vec!["1 cup rice", "salt", "2 tbsp oil"];
        let ingredients = parse_ingredients(&lines);
        assert_eq!(ingredients.len(), 3);
        assert_eq!(ingredients[0].ingredient, "rice");
        assert_eq!(ingredients[1].ingredient, "salt");
        assert_eq!(ingredients[2].unit, "tbsp");
    }
}

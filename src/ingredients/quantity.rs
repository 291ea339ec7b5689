//! Leading quantity detection for ingredient lines.

const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅕', 0.2),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Words that separate the two ends of a range such as `2 to 3`.
const RANGE_WORDS: &[&str] = &["-", "to", "or"];

/// A quantity read from the front of a token stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadingQuantity {
    pub value: f64,
    /// How many tokens the quantity occupied
    pub consumed: usize,
}

/// Reads a quantity from the leading tokens.
///
/// Two-token forms are tried first so `1 1/2` is read as one and a half
/// rather than as `1` followed by an ingredient named `1/2`.
pub fn leading_quantity(tokens: &[&str]) -> Option<LeadingQuantity> {
    let first = *tokens.first()?;

    if let Some(whole) = parse_integer(first) {
        if let Some(second) = tokens.get(1) {
            if let Some(fraction) = parse_fraction(second) {
                return Some(LeadingQuantity {
                    value: whole + fraction,
                    consumed: 2,
                });
            }
        }
    }

    if let Some(low) = parse_number(first) {
        if let (Some(word), Some(high)) = (tokens.get(1), tokens.get(2)) {
            if RANGE_WORDS.contains(word) && parse_number(high).is_some() {
                return Some(LeadingQuantity {
                    value: low,
                    consumed: 3,
                });
            }
        }
    }

    parse_token(first).map(|value| LeadingQuantity { value, consumed: 1 })
}

/// A single token: plain number, fraction, `1-1/2` mixed fraction or `2-3` range.
fn parse_token(token: &str) -> Option<f64> {
    if let Some(value) = parse_number(token) {
        return Some(value);
    }

    let (left, right) = token.split_once('-')?;
    let left = parse_number(left)?;
    if right.contains('/') {
        let fraction = parse_fraction(right)?;
        Some(left + fraction)
    } else {
        // Ranges resolve to their lower bound
        parse_number(right).map(|_| left)
    }
}

/// Integer, decimal, simple fraction or vulgar fraction (optionally after a whole number).
fn parse_number(token: &str) -> Option<f64> {
    if let Some(value) = parse_decimal(token) {
        return Some(value);
    }
    if let Some(value) = parse_fraction(token) {
        return Some(value);
    }

    let last = token.chars().last()?;
    let fraction = vulgar_fraction(last)?;
    let whole = &token[..token.len() - last.len_utf8()];
    if whole.is_empty() {
        Some(fraction)
    } else {
        parse_integer(whole).map(|whole| whole + fraction)
    }
}

fn parse_fraction(token: &str) -> Option<f64> {
    if let Some(value) = token.chars().next().and_then(vulgar_fraction) {
        return (token.chars().count() == 1).then_some(value);
    }

    let (numerator, denominator) = token.split_once('/')?;
    let numerator = parse_decimal(numerator)?;
    let denominator = parse_decimal(denominator)?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

fn parse_integer(token: &str) -> Option<f64> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        token.parse::<f64>().ok()
    } else {
        None
    }
}

/// Digits with at most one decimal point; rejects `inf`, `nan`, exponents and signs.
fn parse_decimal(token: &str) -> Option<f64> {
    let digits = token.chars().filter(|c| c.is_ascii_digit()).count();
    let points = token.chars().filter(|c| *c == '.').count();
    if digits == 0 || points > 1 || digits + points != token.len() {
        return None;
    }
    token.parse::<f64>().ok()
}

fn vulgar_fraction(c: char) -> Option<f64> {
    VULGAR_FRACTIONS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(tokens: &[&str]) -> Option<f64> {
        leading_quantity(tokens).map(|q| q.value)
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(value(&["2", "eggs"]), Some(2.0));
        assert_eq!(value(&["2.5", "cups"]), Some(2.5));
        assert_eq!(value(&[".5", "cup"]), Some(0.5));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(value(&["1/2", "cup"]), Some(0.5));
        assert_eq!(value(&["3/4"]), Some(0.75));
        assert_eq!(value(&["½", "cup"]), Some(0.5));
        assert_eq!(value(&["1½", "cups"]), Some(1.5));
    }

    #[test]
    fn test_mixed_fractions() {
        let quantity = leading_quantity(&["1", "1/2", "cups"]).unwrap();
        assert_eq!(quantity.value, 1.5);
        assert_eq!(quantity.consumed, 2);

        assert_eq!(value(&["1-1/2", "cups"]), Some(1.5));
        assert_eq!(value(&["2", "½"]), Some(2.5));
    }

    #[test]
    fn test_ranges_take_first_value() {
        assert_eq!(value(&["2-3", "cloves"]), Some(2.0));

        let quantity = leading_quantity(&["2", "to", "3", "cloves"]).unwrap();
        assert_eq!(quantity.value, 2.0);
        assert_eq!(quantity.consumed, 3);

        assert_eq!(value(&["1", "-", "2", "cups"]), Some(1.0));
    }

    #[test]
    fn test_not_quantities() {
        assert_eq!(value(&[]), None);
        assert_eq!(value(&["salt"]), None);
        assert_eq!(value(&["1/0"]), None);
        assert_eq!(value(&["nan"]), None);
        assert_eq!(value(&["inf"]), None);
        assert_eq!(value(&["-2"]), None);
        assert_eq!(value(&["1.2.3"]), None);
        assert_eq!(value(&["2-"]), None);
    }
}

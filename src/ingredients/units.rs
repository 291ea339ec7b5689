/// Unit spellings accepted in ingredient lines, with their canonical form.
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tbsps", "tbsp"),
    ("tbsp", "tbsp"),
    ("tbs", "tbsp"),
    ("tbl", "tbsp"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("tsps", "tsp"),
    ("tsp", "tsp"),
    ("cups", "cup"),
    ("cup", "cup"),
    ("pounds", "pound"),
    ("pound", "pound"),
    ("lbs", "pound"),
    ("lb", "pound"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("oz", "oz"),
    ("grams", "g"),
    ("gram", "g"),
    ("g", "g"),
    ("kilograms", "kg"),
    ("kilogram", "kg"),
    ("kgs", "kg"),
    ("kg", "kg"),
    ("liters", "l"),
    ("liter", "l"),
    ("litres", "l"),
    ("litre", "l"),
    ("l", "l"),
    ("milliliters", "ml"),
    ("milliliter", "ml"),
    ("millilitres", "ml"),
    ("millilitre", "ml"),
    ("ml", "ml"),
];

/// Canonical unit for a token, if the token names one.
///
/// Matching is case-insensitive and ignores a trailing `.` or `,`
/// (`Tbs.` and `cups,` are both recognized).
pub fn canonical_unit(token: &str) -> Option<&'static str> {
    let token = token.trim_end_matches(['.', ',']).to_lowercase();
    UNIT_SYNONYMS
        .iter()
        .find(|(spelling, _)| *spelling == token)
        .map(|(_, canonical)| *canonical)
}

/// All canonical units, in table order without duplicates.
pub fn canonical_units() -> Vec<&'static str> {
    let mut units: Vec<&'static str> = Vec::new();
    for (_, canonical) in UNIT_SYNONYMS {
        if !units.contains(canonical) {
            units.push(canonical);
        }
    }
    units
}

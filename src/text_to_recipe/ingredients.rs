use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::{expand_units, is_fraction_glyph, replace_fractions};
use super::sections::{ingredients_section, is_ingredients_heading, is_instructions_heading};
use super::Document;
use crate::model::{IngredientLine, TextLine};

/// Canonical unit names, matched with an optional plural suffix
const UNITS: &[&str] = &[
    "cup",
    "tablespoon",
    "teaspoon",
    "pound",
    "ounce",
    "kilogram",
    "gram",
    "milliliter",
    "liter",
    "litre",
    "quart",
    "pint",
    "gallon",
    "clove",
    "can",
    "pinch",
    "dash",
    "slice",
    "stick",
    "package",
    "bunch",
    "sprig",
    "jar",
];

const BULLETS: &[char] = &['•', '·', '*', '-', '–'];

const AMOUNT: &str = r"(?:\d+[ \t]+\d+/\d+|\d+(?:[./]\d+)?)";

static RE_SEGMENTS: Lazy<Regex> = Lazy::new(|| {
    let units = UNITS
        .iter()
        .map(|unit| format!("{unit}(?:e?s)?"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)^(?P<amount>{AMOUNT}(?:[ \t]*(?:-|–|to)[ \t]*{AMOUNT})?)[ \t]*(?:(?P<unit>{units})\b\.?)?[ \t]*(?:of[ \t]+)?(?P<name>.*)$"
    ))
    .unwrap()
});

static RE_LEADING_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[a-z]{1,4}[ \t]+)?(?:cups?|tablespoons?|teaspoons?|pounds?|ounces?)\b")
        .unwrap()
});

static RE_PREPARATION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:to taste|chopped|minced|diced|sliced)\.?$").unwrap());

static RE_NUMBERED_STEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}[.)][ \t]+\S").unwrap());

static RE_DURATION_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\d+(?:\.\d+)?[ \t]*(?:minutes?|mins?|hours?|hrs?)\b").unwrap()
});

pub fn is_ingredient_candidate(line: &str) -> bool {
    let Some(first) = line.chars().next() else {
        return false;
    };

    first.is_ascii_digit()
        || is_fraction_glyph(first)
        || BULLETS.contains(&first)
        || RE_LEADING_UNIT.is_match(line)
        || RE_PREPARATION_SUFFIX.is_match(line)
}

fn canonical_unit(unit: &str) -> String {
    let lower = unit.to_lowercase();
    UNITS
        .iter()
        .find(|canonical| {
            lower == **canonical
                || lower.strip_suffix("es") == Some(**canonical)
                || lower.strip_suffix('s') == Some(**canonical)
        })
        .map(|canonical| canonical.to_string())
        .unwrap_or(lower)
}

/// Split one ingredient line into amount, unit and name.
///
/// Anything that can't be split ends up whole in `ingredient_name`.
pub fn segment_ingredient(line: &str) -> IngredientLine {
    let line = expand_units(&replace_fractions(line));
    let line = line.trim_start_matches(BULLETS).trim();

    let Some(caps) = RE_SEGMENTS.captures(line) else {
        return IngredientLine::unsegmented(line);
    };

    let name = caps["name"].trim();
    if name.is_empty() {
        return IngredientLine::unsegmented(line);
    }

    IngredientLine::new(
        caps["amount"].trim(),
        caps.name("unit")
            .map(|unit| canonical_unit(unit.as_str()))
            .unwrap_or_default(),
        name,
    )
}

/// Lines outside an ingredient block that only look like ingredients
fn is_stray_line(line: &str) -> bool {
    is_ingredients_heading(line)
        || is_instructions_heading(line)
        || RE_NUMBERED_STEP.is_match(line)
        || RE_DURATION_VALUE.is_match(line)
}

fn collect(lines: &[TextLine], skip: fn(&str) -> bool) -> Vec<IngredientLine> {
    lines
        .iter()
        .filter(|line| !line.is_blank())
        .filter(|line| is_ingredient_candidate(&line.text) && !skip(&line.text))
        .map(|line| segment_ingredient(&line.text))
        .collect()
}

pub fn extract_ingredients(doc: &Document) -> Vec<IngredientLine> {
    let ingredients = match ingredients_section(doc) {
        Some(section) => collect(&section, |_| false),
        None => {
            debug!("No ingredient heading, scanning the whole document");
            collect(doc.lines(), is_stray_line)
        }
    };
    debug!("Extracted {} ingredients", ingredients.len());
    ingredients
}

use once_cell::sync::Lazy;
use regex::Regex;

use super::label_row::find_label_row;
use super::{first_match, Document, Strategy};

const COUNT: &str = r"(?P<low>\d+)(?:[ \t]*[-–—][ \t]*(?P<high>\d+))?";

fn servings_regex(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){}", pattern.replace("{COUNT}", COUNT))).unwrap()
}

static RE_SERVES: Lazy<Regex> = Lazy::new(|| {
    servings_regex(r"\bserves[ \t]*:?[ \t]*{COUNT}(?:[ \t]*(?:people|persons))?")
});
static RE_SERVINGS_LABEL: Lazy<Regex> =
    Lazy::new(|| servings_regex(r"\bservings[ \t]*:?[ \t]*{COUNT}"));
static RE_YIELD: Lazy<Regex> = Lazy::new(|| {
    servings_regex(r"\byield[ \t]*:?[ \t]*{COUNT}(?:[ \t]*servings)?")
});
static RE_MAKES: Lazy<Regex> = Lazy::new(|| {
    servings_regex(r"\bmakes[ \t]*:?[ \t]*{COUNT}(?:[ \t]*servings)?")
});
static RE_FOR_PEOPLE: Lazy<Regex> =
    Lazy::new(|| servings_regex(r"\bfor[ \t]*:?[ \t]*{COUNT}[ \t]*(?:people|persons)\b"));
static RE_BARE_SERVINGS: Lazy<Regex> =
    Lazy::new(|| servings_regex(r"\b{COUNT}[ \t]*servings\b"));
static RE_INGREDIENTS_FOR: Lazy<Regex> =
    Lazy::new(|| servings_regex(r"\bingredients[ \t]+for[ \t]+{COUNT}"));

/// `"N"` or `"N-M"` from the first match of `re`
fn count_from(re: &Regex, doc: &Document) -> Option<String> {
    let caps = re.captures(doc.text())?;
    let low = caps.name("low")?.as_str();
    Some(match caps.name("high") {
        Some(high) => format!("{}-{}", low, high.as_str()),
        None => low.to_string(),
    })
}

fn from_label_row(doc: &Document) -> Option<String> {
    find_label_row(doc)?.servings
}

fn from_serves(doc: &Document) -> Option<String> {
    count_from(&RE_SERVES, doc)
}

fn from_servings_label(doc: &Document) -> Option<String> {
    count_from(&RE_SERVINGS_LABEL, doc)
}

fn from_yield(doc: &Document) -> Option<String> {
    count_from(&RE_YIELD, doc)
}

fn from_makes(doc: &Document) -> Option<String> {
    count_from(&RE_MAKES, doc)
}

fn from_for_people(doc: &Document) -> Option<String> {
    count_from(&RE_FOR_PEOPLE, doc)
}

fn from_bare_servings(doc: &Document) -> Option<String> {
    count_from(&RE_BARE_SERVINGS, doc)
}

fn from_ingredients_header(doc: &Document) -> Option<String> {
    count_from(&RE_INGREDIENTS_FOR, doc)
}

const STRATEGIES: &[Strategy<String>] = &[
    Strategy::new("label row", from_label_row),
    Strategy::new("serves", from_serves),
    Strategy::new("servings", from_servings_label),
    Strategy::new("yield", from_yield),
    Strategy::new("makes", from_makes),
    Strategy::new("for people", from_for_people),
    Strategy::new("n servings", from_bare_servings),
    Strategy::new("ingredients for", from_ingredients_header),
];

pub fn extract_servings(doc: &Document) -> String {
    first_match("servings", doc, STRATEGIES).unwrap_or_default()
}

use once_cell::sync::Lazy;
use regex::Regex;

use super::{first_match, Document, Strategy};
use crate::model::UNTITLED_RECIPE;

/// How many leading lines may hold the title
const TITLE_WINDOW: usize = 5;

const MIN_TITLE_LEN: usize = 2;
const MAX_TITLE_LEN: usize = 50;

/// Words that mark a line as structure rather than a dish name
const NON_TITLE_WORDS: &[&str] = &[
    "ingredients",
    "instructions",
    "directions",
    "steps",
    "method",
    "preparation",
    "recipe",
    "yield",
    "serves",
    "servings",
    "prep time",
    "cook time",
    "total time",
];

static RE_DECLARED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:recipe|title|name)[ \t]*:[ \t]*(?P<title>.+)$").unwrap());

static RE_TRAILING_RECIPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?P<title>.+?)[ \t]+recipe[ \t]*:?$").unwrap());

pub fn is_likely_title(candidate: &str) -> bool {
    let candidate = candidate.trim();
    let len = candidate.chars().count();
    if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&len) {
        return false;
    }

    let lower = candidate.to_lowercase();
    if NON_TITLE_WORDS.iter().any(|word| lower.contains(word)) {
        return false;
    }

    candidate
        .chars()
        .next()
        .is_some_and(|first| first.is_uppercase())
}

fn leading_lines(doc: &Document) -> impl Iterator<Item = &str> {
    doc.non_blank_lines()
        .take(TITLE_WINDOW)
        .map(|line| line.text.as_str())
}

fn validated(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    is_likely_title(candidate).then(|| candidate.to_string())
}

fn from_declaration(doc: &Document) -> Option<String> {
    doc.non_blank_lines().find_map(|line| {
        RE_DECLARED
            .captures(&line.text)
            .or_else(|| RE_TRAILING_RECIPE.captures(&line.text))
            .and_then(|caps| validated(&caps["title"]))
    })
}

fn from_first_lines(doc: &Document) -> Option<String> {
    leading_lines(doc).find_map(validated)
}

fn from_emphasis(doc: &Document) -> Option<String> {
    leading_lines(doc)
        .filter(|line| line.contains(['*', '_']))
        .find_map(|line| validated(&strip_emphasis(line)))
}

fn strip_emphasis(line: &str) -> String {
    line.replace(['*', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn from_longest(doc: &Document) -> Option<String> {
    leading_lines(doc)
        .map(|line| line.trim_start_matches(|c: char| !c.is_alphanumeric()))
        .filter(|line| is_likely_title(line))
        .fold(None, |best: Option<&str>, line| match best {
            Some(current) if current.chars().count() >= line.chars().count() => Some(current),
            _ => Some(line),
        })
        .map(|line| line.trim().to_string())
}

const STRATEGIES: &[Strategy<String>] = &[
    Strategy::new("declaration", from_declaration),
    Strategy::new("first lines", from_first_lines),
    Strategy::new("emphasis", from_emphasis),
    Strategy::new("longest line", from_longest),
];

pub fn extract_title(doc: &Document) -> String {
    first_match("title", doc, STRATEGIES).unwrap_or_else(|| {
        doc.non_blank_lines()
            .next()
            .map(|line| line.text.clone())
            .unwrap_or_else(|| UNTITLED_RECIPE.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(text: &str) -> String {
        extract_title(&Document::new(text))
    }

    #[test]
    fn test_is_likely_title() {
        assert!(is_likely_title("Chicken Tikka Masala"));
        assert!(is_likely_title("Grandma's Soup"));
        assert!(!is_likely_title("A"));
        assert!(!is_likely_title("Ingredients"));
        assert!(!is_likely_title("Prep Time: 10 min"));
        assert!(!is_likely_title("lowercase start"));
        assert!(!is_likely_title("2 cups flour"));
        assert!(!is_likely_title(&"Very ".repeat(11)));
    }

    #[test]
    fn test_first_line_title() {
        assert_eq!(
            title("Chicken Tikka Masala\nIngredients\n1 pound chicken"),
            "Chicken Tikka Masala"
        );
    }

    #[test]
    fn test_declared_title() {
        assert_eq!(title("From the kitchen of Ann\nTitle: Lemon Drizzle Cake"), "Lemon Drizzle Cake");
        assert_eq!(title("Page 12\nBest Banana Bread Recipe"), "Best Banana Bread");
    }

    #[test]
    fn test_skips_non_title_lines() {
        assert_eq!(
            title("serves 4 hungry people\nRecipe card\nShakshuka\nIngredients"),
            "Shakshuka"
        );
    }

    #[test]
    fn test_emphasis_markers_stripped() {
        assert_eq!(title("**spicy** noodles\n_Dan Dan Noodles_\n2 cups noodles"), "Dan Dan Noodles");
        assert_eq!(title("*French toast*"), "French toast");
    }

    #[test]
    fn test_longest_after_trimming_bullets() {
        assert_eq!(title("• Pad Thai\n- Pad See Ew Noodles\nhello"), "Pad See Ew Noodles");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(title("2 cups flour\n1 egg"), "2 cups flour");
        assert_eq!(title(""), UNTITLED_RECIPE);
        assert_eq!(title("\n   \n"), UNTITLED_RECIPE);
    }
}

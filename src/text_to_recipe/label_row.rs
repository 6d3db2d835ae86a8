//! Recipe cards often print a header row of labels with the values on the
//! line below:
//!
//! ```text
//! Prep Time   Cook Time   Servings
//! 15 mins     1 hr        4
//! ```
//!
//! Values are bound to labels by position, left to right.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::time::duration_minutes;
use super::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    PrepTime,
    CookTime,
    TotalTime,
    Servings,
    DietType,
    MealType,
}

const LABEL_KEYWORDS: &[(Label, &[&str])] = &[
    (Label::PrepTime, &["prep time", "preparation time"]),
    (Label::CookTime, &["cook time", "cooking time", "bake time"]),
    (Label::TotalTime, &["total time"]),
    (Label::Servings, &["servings", "serves"]),
    (Label::DietType, &["diet type"]),
    (Label::MealType, &["meal type"]),
];

static RE_VALUE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        (?P<duration>
            \d+(?:\.\d+)?\s*(?:hours?|hrs?|h)\b(?:\s*\d+\s*(?:minutes?|mins?|m)\b)?
            | \d+\s*(?:minutes?|mins?|m)\b
        )
        | (?P<number>\d+(?:\s*[-–—]\s*\d+)?)
        | (?P<word>[a-z]+)
        ",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum ValueToken {
    Duration(String),
    Number(String),
    Word(String),
}

/// Values read from a label row, keyed by the label they sat under
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRow {
    pub prep_minutes: Option<u32>,
    pub cook_minutes: Option<u32>,
    pub total_minutes: Option<u32>,
    pub servings: Option<String>,
    pub diet_type: Option<String>,
    pub meal_type: Option<String>,
}

/// Labels found on a line, ordered by where they appear
fn labels_in(line: &str) -> Vec<Label> {
    let lower = line.to_lowercase();
    let mut found: Vec<(usize, Label)> = LABEL_KEYWORDS
        .iter()
        .filter_map(|(label, keywords)| {
            keywords
                .iter()
                .filter_map(|keyword| lower.find(keyword))
                .min()
                .map(|pos| (pos, *label))
        })
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, label)| label).collect()
}

fn value_tokens(line: &str) -> Vec<ValueToken> {
    RE_VALUE_TOKEN
        .captures_iter(line)
        .filter_map(|caps| {
            if let Some(m) = caps.name("duration") {
                Some(ValueToken::Duration(m.as_str().to_string()))
            } else if let Some(m) = caps.name("number") {
                Some(ValueToken::Number(m.as_str().to_string()))
            } else {
                caps.name("word")
                    .map(|m| ValueToken::Word(m.as_str().to_string()))
            }
        })
        .collect()
}

fn time_value(token: &ValueToken) -> Option<u32> {
    match token {
        ValueToken::Duration(text) => duration_minutes(text),
        // Bare numbers under a time label are minutes
        ValueToken::Number(text) => text
            .split(|c: char| !c.is_ascii_digit())
            .next()
            .and_then(|n| n.parse().ok()),
        ValueToken::Word(_) => None,
    }
}

fn servings_value(token: &ValueToken) -> Option<String> {
    match token {
        ValueToken::Number(text) => Some(
            text.split(['-', '–', '—'])
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("-"),
        ),
        _ => None,
    }
}

/// Find the first label row followed by a value row.
pub fn find_label_row(doc: &Document) -> Option<LabelRow> {
    doc.lines().windows(2).find_map(|pair| {
        // A header row carries labels only, its values live on the next line
        if pair[0].text.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        let labels = labels_in(&pair[0].text);
        if labels.len() < 2 || !labels_in(&pair[1].text).is_empty() {
            return None;
        }

        let tokens = value_tokens(&pair[1].text);
        let has_number = tokens
            .iter()
            .any(|t| matches!(t, ValueToken::Duration(_) | ValueToken::Number(_)));
        if !has_number {
            return None;
        }

        let mut row = LabelRow::default();
        for (label, token) in labels.iter().zip(tokens.iter()) {
            match label {
                Label::PrepTime => row.prep_minutes = time_value(token),
                Label::CookTime => row.cook_minutes = time_value(token),
                Label::TotalTime => row.total_minutes = time_value(token),
                Label::Servings => row.servings = servings_value(token),
                Label::DietType => {
                    if let ValueToken::Word(word) = token {
                        row.diet_type = Some(word.clone());
                    }
                }
                Label::MealType => {
                    if let ValueToken::Word(word) = token {
                        row.meal_type = Some(word.clone());
                    }
                }
            }
        }

        debug!(
            "Label row at line {} with {} labels: {:?}",
            pair[0].index,
            labels.len(),
            row
        );
        Some(row)
    })
}

use once_cell::sync::Lazy;
use regex::Regex;

use super::sections::instructions_section;
use super::{first_match, Document, Strategy};
use crate::model::{TextLine, INSTRUCTIONS_PLACEHOLDER};

/// Unmarked lines starting with one of these read as steps
const COOKING_VERBS: &[&str] = &[
    "preheat", "heat", "mix", "stir", "add", "combine", "cook", "bake", "roast", "simmer", "boil",
    "whisk", "beat", "pour", "place", "season", "serve", "fry", "saute", "sauté", "blend", "chop",
    "slice", "drain", "grill", "melt", "fold", "knead", "bring", "remove", "transfer", "cover",
    "reduce", "toss", "spread", "sprinkle", "let", "allow", "cut", "marinate",
];

const MIN_VERB_STEP_WORDS: usize = 6;

static RE_STEP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<marker>\d{1,2}[.)]|[*•·–-])(?P<gap>[ \t]*)(?P<rest>.*)$").unwrap());

/// Text after a step marker, `None` when the line has no marker.
///
/// `1.5 cups` is a quantity, not step one.
fn strip_step_marker(line: &str) -> Option<&str> {
    let caps = RE_STEP_MARKER.captures(line)?;
    let marker = caps.name("marker")?.as_str();
    let rest = caps.name("rest")?.as_str();
    if marker.ends_with('.')
        && caps["gap"].is_empty()
        && rest.starts_with(|c: char| c.is_ascii_digit())
    {
        return None;
    }
    Some(rest)
}

fn strip_numbered_marker(line: &str) -> Option<&str> {
    if !line.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    strip_step_marker(line)
}

fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

/// Group section lines into steps.
fn split_steps(lines: &[TextLine]) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();
    let mut previous: Option<&TextLine> = None;

    for line in lines {
        if line.is_blank() {
            previous = Some(line);
            continue;
        }

        let opens_sentence = previous.map_or(true, |prev| {
            prev.is_blank() || prev.text.ends_with('.')
        });

        if let Some(rest) = strip_step_marker(&line.text) {
            steps.push(rest.trim().to_string());
        } else if steps.is_empty() || (starts_uppercase(&line.text) && opens_sentence) {
            steps.push(line.text.clone());
        } else if let Some(current) = steps.last_mut() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&line.text);
        }

        previous = Some(line);
    }

    steps.retain(|step| !step.is_empty());
    steps
}

/// `"1. first\n\n2. second"`
pub fn render_steps(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn non_empty(steps: Vec<String>) -> Option<Vec<String>> {
    (!steps.is_empty()).then_some(steps)
}

fn from_section(doc: &Document) -> Option<Vec<String>> {
    non_empty(split_steps(&instructions_section(doc)?))
}

fn from_numbered_lines(doc: &Document) -> Option<Vec<String>> {
    non_empty(
        doc.non_blank_lines()
            .filter_map(|line| strip_numbered_marker(&line.text))
            .map(|rest| rest.trim().to_string())
            .filter(|rest| !rest.is_empty())
            .collect(),
    )
}

fn starts_with_cooking_verb(line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return false;
    };
    let first = first
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    COOKING_VERBS.contains(&first.as_str()) && 1 + words.count() >= MIN_VERB_STEP_WORDS
}

fn from_cooking_verbs(doc: &Document) -> Option<Vec<String>> {
    non_empty(
        doc.non_blank_lines()
            .filter(|line| starts_with_cooking_verb(&line.text))
            .map(|line| line.text.clone())
            .collect(),
    )
}

const STRATEGIES: &[Strategy<Vec<String>>] = &[
    Strategy::new("section", from_section),
    Strategy::new("numbered lines", from_numbered_lines),
    Strategy::new("cooking verbs", from_cooking_verbs),
];

pub fn extract_instructions(doc: &Document) -> String {
    first_match("instructions", doc, STRATEGIES)
        .map(|steps| render_steps(&steps))
        .unwrap_or_else(|| INSTRUCTIONS_PLACEHOLDER.to_string())
}

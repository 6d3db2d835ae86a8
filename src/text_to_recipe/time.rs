use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::label_row::find_label_row;
use super::{first_match, Document, Strategy};

const DURATION: &str = r"(?:(?P<hours>\d+(?:\.\d+)?)[ \t]*(?:hours?|hrs?|h)\b(?:[ \t]*(?:and[ \t]*)?(?P<hour_minutes>\d+)[ \t]*(?:minutes?|mins?|m)\b)?|(?P<minutes>\d+)[ \t]*(?:minutes?|mins?|m)\b)";

const PREP_LABEL: &str = r"\bprep(?:aration)?[ \t]*time\b";
const COOK_LABEL: &str = r"\b(?:cook(?:ing)?|bake|baking)[ \t]*time\b";
const TOTAL_LABEL: &str = r"\b(?:total[ \t]*time|time[ \t]*needed|ready[ \t]*in)\b";

static RE_DURATION: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("(?i){DURATION}")).unwrap());

/// Label followed by a duration, on the same line or the next one
fn labeled_duration(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?i){label}[ \t]*[:\-–]?[ \t]*(?:\n[ \t]*)?{DURATION}"
    ))
    .unwrap()
}

/// Label followed by a number without a unit, same line only
fn labeled_bare_number(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){label}[ \t]*[:\-–]?[ \t]*(?P<bare>\d+)\b")).unwrap()
}

static RE_PREP: Lazy<Regex> = Lazy::new(|| labeled_duration(PREP_LABEL));
static RE_COOK: Lazy<Regex> = Lazy::new(|| labeled_duration(COOK_LABEL));
static RE_TOTAL: Lazy<Regex> = Lazy::new(|| labeled_duration(TOTAL_LABEL));
static RE_PREP_BARE: Lazy<Regex> = Lazy::new(|| labeled_bare_number(PREP_LABEL));
static RE_COOK_BARE: Lazy<Regex> = Lazy::new(|| labeled_bare_number(COOK_LABEL));
static RE_TOTAL_BARE: Lazy<Regex> = Lazy::new(|| labeled_bare_number(TOTAL_LABEL));

fn minutes_from(caps: &Captures) -> Option<u32> {
    if let Some(hours) = caps.name("hours") {
        let hours: f64 = hours.as_str().parse().ok()?;
        let extra: u32 = match caps.name("hour_minutes") {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        let minutes = (hours * 60.0).round();
        // out of range counts as no match
        if !(0.0..=f64::from(u32::MAX)).contains(&minutes) {
            return None;
        }
        (minutes as u32).checked_add(extra)
    } else if let Some(minutes) = caps.name("minutes") {
        minutes.as_str().parse().ok()
    } else {
        caps.name("bare").and_then(|m| m.as_str().parse().ok())
    }
}

/// Minutes in the first duration expression of `text`, e.g.
/// `"1 hour 30 minutes"` -> 90.
pub fn duration_minutes(text: &str) -> Option<u32> {
    RE_DURATION
        .captures(text)
        .and_then(|caps| minutes_from(&caps))
}

/// Canonical rendering of a duration
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

fn match_minutes(re: &Regex, doc: &Document) -> Option<u32> {
    re.captures_iter(doc.text())
        .find_map(|caps| minutes_from(&caps))
}

fn prep_from_label_row(doc: &Document) -> Option<u32> {
    find_label_row(doc)?.prep_minutes
}

fn prep_from_labeled_line(doc: &Document) -> Option<u32> {
    match_minutes(&RE_PREP, doc)
}

fn prep_from_bare_number(doc: &Document) -> Option<u32> {
    match_minutes(&RE_PREP_BARE, doc)
}

fn cook_from_label_row(doc: &Document) -> Option<u32> {
    find_label_row(doc)?.cook_minutes
}

fn cook_from_labeled_line(doc: &Document) -> Option<u32> {
    match_minutes(&RE_COOK, doc)
}

fn cook_from_bare_number(doc: &Document) -> Option<u32> {
    match_minutes(&RE_COOK_BARE, doc)
}

fn total_from_label_row(doc: &Document) -> Option<u32> {
    find_label_row(doc)?.total_minutes
}

fn total_from_labeled_line(doc: &Document) -> Option<u32> {
    match_minutes(&RE_TOTAL, doc)
}

fn total_from_bare_number(doc: &Document) -> Option<u32> {
    match_minutes(&RE_TOTAL_BARE, doc)
}

const PREP_STRATEGIES: &[Strategy<u32>] = &[
    Strategy::new("label row", prep_from_label_row),
    Strategy::new("labeled duration", prep_from_labeled_line),
    Strategy::new("labeled number", prep_from_bare_number),
];

const COOK_STRATEGIES: &[Strategy<u32>] = &[
    Strategy::new("label row", cook_from_label_row),
    Strategy::new("labeled duration", cook_from_labeled_line),
    Strategy::new("labeled number", cook_from_bare_number),
];

const TOTAL_STRATEGIES: &[Strategy<u32>] = &[
    Strategy::new("label row", total_from_label_row),
    Strategy::new("labeled duration", total_from_labeled_line),
    Strategy::new("labeled number", total_from_bare_number),
];

/// Prep, cook and total time in minutes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeFields {
    pub prep: Option<u32>,
    pub cook: Option<u32>,
    pub total: Option<u32>,
}

impl TimeFields {
    /// Fill a missing total from prep + cook.
    pub fn with_derived_total(self) -> Self {
        let total = match (self.total, self.prep, self.cook) {
            (Some(total), _, _) => Some(total),
            (None, Some(prep), Some(cook)) => prep.checked_add(cook),
            _ => None,
        };
        Self { total, ..self }
    }

    /// Canonical `(prep, cook, total)` strings, empty when unknown
    pub fn render(&self) -> (String, String, String) {
        let render = |value: Option<u32>| value.map(format_minutes).unwrap_or_default();
        (render(self.prep), render(self.cook), render(self.total))
    }
}

pub fn extract_times(doc: &Document) -> TimeFields {
    TimeFields {
        prep: first_match("prep time", doc, PREP_STRATEGIES),
        cook: first_match("cook time", doc, COOK_STRATEGIES),
        total: first_match("total time", doc, TOTAL_STRATEGIES),
    }
}

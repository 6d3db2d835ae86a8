//! Heuristic structuring of recognized recipe text.
//!
//! Every field has an ordered table of [`Strategy`] functions, tried from
//! the most to the least confident. A strategy that finds nothing simply
//! yields `None` and the next one runs; running out of strategies leaves
//! the field at its empty default.

pub mod ingredients;
pub mod instructions;
pub mod label_row;
pub mod normalize;
pub mod sections;
pub mod servings;
pub mod time;
pub mod title;

use std::fmt;

use log::debug;

use crate::model::TextLine;

pub use ingredients::extract_ingredients;
pub use instructions::extract_instructions;
pub use normalize::normalize_text;
pub use servings::extract_servings;
pub use time::{extract_times, TimeFields};
pub use title::extract_title;

/// Normalized recipe text, split into indexed lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    lines: Vec<TextLine>,
}

impl Document {
    /// Normalize raw recognized text and index its lines
    pub fn new(raw: &str) -> Self {
        Self::from_normalized(normalize_text(raw))
    }

    /// Wrap text that has already been through [`normalize_text`]
    pub fn from_normalized(text: String) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| TextLine {
                index,
                text: line.trim().to_string(),
            })
            .collect();
        Self { text, lines }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    pub fn non_blank_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.lines.iter().filter(|line| !line.is_blank())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A named heuristic for one field
pub(crate) struct Strategy<T> {
    name: &'static str,
    run: fn(&Document) -> Option<T>,
}

impl<T> Strategy<T> {
    pub(crate) const fn new(name: &'static str, run: fn(&Document) -> Option<T>) -> Self {
        Self { name, run }
    }
}

/// Value of the first strategy that produces one
pub(crate) fn first_match<T: fmt::Debug>(
    field: &str,
    doc: &Document,
    strategies: &[Strategy<T>],
) -> Option<T> {
    strategies.iter().find_map(|strategy| {
        let value = (strategy.run)(doc)?;
        debug!("{} found by '{}' strategy: {:?}", field, strategy.name, value);
        Some(value)
    })
}

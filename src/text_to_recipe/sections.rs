//! Heading anchors that bound the ingredient and instruction blocks.

use std::ops::Range;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Document;
use crate::model::TextLine;

/// Headings are short lines, anything longer is prose that happens to
/// start with a keyword.
const MAX_HEADING_LEN: usize = 40;

static RE_INGREDIENTS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[#*•·\-\s]*ingredients?\b").unwrap());

static RE_INSTRUCTIONS_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[#*•·\-\s]*(?:instructions|directions|method|steps)\b").unwrap()
});

/// `Directions: Bake it.` carries its first content on the heading line
static RE_INGREDIENTS_INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[#*•·\-\s]*ingredients?[ \t]*[:\-–][ \t]*(?P<rest>\S.*)$").unwrap()
});

static RE_INSTRUCTIONS_INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[#*•·\-\s]*(?:instructions|directions|method|steps)[ \t]*[:\-–][ \t]*(?P<rest>\S.*)$",
    )
    .unwrap()
});

pub fn is_ingredients_heading(line: &str) -> bool {
    line.chars().count() <= MAX_HEADING_LEN && RE_INGREDIENTS_HEADING.is_match(line)
}

pub fn is_instructions_heading(line: &str) -> bool {
    line.chars().count() <= MAX_HEADING_LEN && RE_INSTRUCTIONS_HEADING.is_match(line)
}

/// Line ranges (excluding the heading itself) of the located blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub ingredients: Option<Range<usize>>,
    pub instructions: Option<Range<usize>>,
}

impl Sections {
    pub fn locate(doc: &Document) -> Self {
        let lines = doc.lines();
        let ingredients_heading = lines
            .iter()
            .position(|line| is_ingredients_heading(&line.text));

        // Prefer an instruction heading that follows the ingredient block
        let search_from = ingredients_heading.map_or(0, |h| h + 1);
        let instructions_heading = lines[search_from.min(lines.len())..]
            .iter()
            .position(|line| is_instructions_heading(&line.text))
            .map(|offset| offset + search_from)
            .or_else(|| {
                lines
                    .iter()
                    .position(|line| is_instructions_heading(&line.text))
            });

        let ingredients = ingredients_heading.map(|start| {
            let end = instructions_heading
                .filter(|&h| h > start)
                .unwrap_or(lines.len());
            start + 1..end
        });

        let instructions = instructions_heading.map(|start| {
            // An ingredient heading printed after the steps closes them
            let end = ingredients_heading
                .filter(|&h| h > start)
                .unwrap_or(lines.len());
            start + 1..end
        });

        let sections = Sections {
            ingredients: ingredients
                .filter(|range| has_content(lines, range, &RE_INGREDIENTS_INLINE)),
            instructions: instructions
                .filter(|range| has_content(lines, range, &RE_INSTRUCTIONS_INLINE)),
        };
        debug!("Located sections: {:?}", sections);
        sections
    }
}

/// Text after `Heading:` on the heading line itself
fn inline_content(inline: &Regex, heading: &TextLine) -> Option<TextLine> {
    let caps = inline.captures(&heading.text)?;
    Some(TextLine {
        index: heading.index,
        text: caps["rest"].trim().to_string(),
    })
}

fn has_content(lines: &[TextLine], range: &Range<usize>, inline: &Regex) -> bool {
    inline_content(inline, &lines[range.start - 1]).is_some()
        || lines[range.clone()].iter().any(|line| !line.is_blank())
}

fn section_lines(doc: &Document, range: Range<usize>, inline: &Regex) -> Vec<TextLine> {
    let lines = doc.lines();
    inline_content(inline, &lines[range.start - 1])
        .into_iter()
        .chain(lines[range].iter().cloned())
        .collect()
}

/// Lines of the ingredient block, if it has a heading and any content
pub fn ingredients_section(doc: &Document) -> Option<Vec<TextLine>> {
    Sections::locate(doc)
        .ingredients
        .map(|range| section_lines(doc, range, &RE_INGREDIENTS_INLINE))
}

/// Lines of the instruction block, if it has a heading and any content
pub fn instructions_section(doc: &Document) -> Option<Vec<TextLine>> {
    Sections::locate(doc)
        .instructions
        .map(|range| section_lines(doc, range, &RE_INSTRUCTIONS_INLINE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[TextLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_heading_detection() {
        assert!(is_ingredients_heading("Ingredients:"));
        assert!(is_ingredients_heading("INGREDIENTS"));
        assert!(is_ingredients_heading("## Ingredient"));
        assert!(is_ingredients_heading("Ingredients for 4"));
        assert!(!is_ingredients_heading("Mix the ingredients"));

        assert!(is_instructions_heading("Directions"));
        assert!(is_instructions_heading("Method:"));
        assert!(is_instructions_heading("Steps"));
        assert!(is_instructions_heading("* Instructions *"));
        assert!(!is_instructions_heading(
            "Method in this recipe is to fold the batter gently"
        ));
    }

    #[test]
    fn test_both_sections() {
        let doc = Document::new("Soup\nIngredients:\n2 cups carrots\n1 onion\nInstructions:\n1. Chop.\n2. Simmer.");

        assert_eq!(
            texts(&ingredients_section(&doc).unwrap()),
            vec!["2 cups carrots", "1 onion"]
        );
        assert_eq!(
            texts(&instructions_section(&doc).unwrap()),
            vec!["1. Chop.", "2. Simmer."]
        );
    }

    #[test]
    fn test_ingredients_run_to_end_without_instruction_heading() {
        let doc = Document::new("Salad\nIngredients\n1 lettuce\n2 tomatoes");
        assert_eq!(
            texts(&ingredients_section(&doc).unwrap()),
            vec!["1 lettuce", "2 tomatoes"]
        );
        assert!(instructions_section(&doc).is_none());
    }

    #[test]
    fn test_no_headings() {
        let doc = Document::new("Toast\n1 slice bread\nToast it.");
        assert_eq!(Sections::locate(&doc), Sections::default());
    }

    #[test]
    fn test_empty_section_is_not_located() {
        let doc = Document::new("Cake\nIngredients:\nDirections:\nBake it.");
        assert!(ingredients_section(&doc).is_none());
        assert_eq!(texts(&instructions_section(&doc).unwrap()), vec!["Bake it."]);
    }

    #[test]
    fn test_steps_before_ingredients() {
        let doc = Document::new("Bread\nMethod\nKnead well.\nIngredients\n500 gram flour");
        assert_eq!(texts(&instructions_section(&doc).unwrap()), vec!["Knead well."]);
        assert_eq!(texts(&ingredients_section(&doc).unwrap()), vec!["500 gram flour"]);
    }

    #[test]
    fn test_content_on_heading_line() {
        let doc = Document::new("Cake\nIngredients: 2 eggs\n1 cup sugar\nDirections: Bake it.");
        assert_eq!(
            texts(&ingredients_section(&doc).unwrap()),
            vec!["2 eggs", "1 cup sugar"]
        );
        assert_eq!(texts(&instructions_section(&doc).unwrap()), vec!["Bake it."]);

        // no separator, so "for 4" is part of the heading
        let doc = Document::new("Ingredients for 4\n2 eggs");
        assert_eq!(texts(&ingredients_section(&doc).unwrap()), vec!["2 eggs"]);
    }
}

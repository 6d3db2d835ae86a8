//! Cleanup applied to recognized text before any field is extracted.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const FRACTION_GLYPHS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Normalize recognized text.
///
/// Line structure is preserved (blank lines included, collapsed to one)
/// because the extractors rely on line adjacency.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    for line in unified.lines() {
        let line = collapse_spaces(line);
        if line.is_empty() && lines.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        lines.push(expand_units(&replace_fractions(&line)));
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

fn collapse_spaces(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rewrite vulgar fraction glyphs as ASCII `a/b`.
pub fn replace_fractions(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    for ch in line.chars() {
        if ch == '⁄' {
            out.push('/');
            continue;
        }
        match FRACTION_GLYPHS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, ascii)) => {
                // 1½ -> 1 1/2
                if out.chars().last().is_some_and(|prev| prev.is_ascii_digit()) {
                    out.push(' ');
                }
                out.push_str(ascii);
            }
            None => out.push(ch),
        }
    }
    out
}

pub fn is_fraction_glyph(ch: char) -> bool {
    FRACTION_GLYPHS.iter().any(|(glyph, _)| *glyph == ch)
}

static RE_UNIT_ABBREVIATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+(?:[./]\d+)?)\s*(tbsp|tbs|tsp|oz|lbs|lb|kg|ml|(?-i:c)|g|l)\b\.?")
        .unwrap()
});

/// Expand unit abbreviations that directly follow a quantity.
///
/// Requiring the number keeps single letters such as `c` or `l` from
/// being rewritten inside ordinary words. Cups are lowercase `c` only,
/// `180 C` is a temperature.
pub fn expand_units(line: &str) -> String {
    RE_UNIT_ABBREVIATION
        .replace_all(line, |caps: &Captures| {
            let unit = match caps[2].to_lowercase().as_str() {
                "tbsp" | "tbs" => "tablespoon",
                "tsp" => "teaspoon",
                "oz" => "ounce",
                "lbs" => "pounds",
                "lb" => "pound",
                "kg" => "kilogram",
                "ml" => "milliliter",
                "c" => "cup",
                "g" => "gram",
                "l" => "liter",
                _ => return caps[0].to_string(),
            };
            format!("{} {}", &caps[1], unit)
        })
        .into_owned()
}

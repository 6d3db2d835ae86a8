use serde::{Deserialize, Serialize};

/// Title used when the recognized text has no lines at all
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

/// Instructions value used when no step could be located
pub const INSTRUCTIONS_PLACEHOLDER: &str =
    "No instructions detected. Please enter the steps manually.";

/// Recognized text of a single image, tagged with its position in the
/// caller-supplied image order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub position: usize,
    pub text: String,
}

impl RawPage {
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Joins pages in image order, separated by a blank line.
    ///
    /// Pages that recognized nothing are skipped so they don't leave
    /// stray blank lines behind.
    pub fn concatenate(pages: &[RawPage]) -> String {
        let mut ordered: Vec<&RawPage> = pages.iter().collect();
        ordered.sort_by_key(|page| page.position);

        ordered
            .into_iter()
            .map(|page| page.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A normalized line and its index in the full document.
///
/// Blank lines are kept with empty `text`, several heuristics look at
/// what precedes or follows a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub index: usize,
    pub text: String,
}

impl TextLine {
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// One ingredient split into amount, unit and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    pub amount: String,
    pub unit: String,
    pub ingredient_name: String,
}

impl IngredientLine {
    pub fn new(
        amount: impl Into<String>,
        unit: impl Into<String>,
        ingredient_name: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            unit: unit.into(),
            ingredient_name: ingredient_name.into(),
        }
    }

    /// An ingredient whose amount and unit could not be isolated
    pub fn unsegmented(line: impl Into<String>) -> Self {
        Self {
            ingredient_name: line.into(),
            ..Default::default()
        }
    }
}

/// Structured recipe produced by the extraction pipeline.
///
/// Every field is always present. Unknown values are empty strings,
/// `diet_type` and `meal_type` are left for manual classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: String,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: String,
    pub diet_type: String,
    pub meal_type: String,
}

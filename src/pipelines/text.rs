use std::sync::Arc;

use log::{debug, warn};
use tokio::task::{spawn_blocking, JoinError};

use crate::model::{IngredientLine, Recipe, INSTRUCTIONS_PLACEHOLDER, UNTITLED_RECIPE};
use crate::text_to_recipe::{
    extract_ingredients, extract_instructions, extract_servings, extract_times, extract_title,
    Document, TimeFields,
};

/// Structure recognized text into a recipe, running the field extractors
/// concurrently.
///
/// An extractor that panics doesn't take the call down with it; its field
/// falls back to the same value an unmatched field would get.
pub async fn process(text: &str) -> Recipe {
    let doc = Arc::new(Document::new(text));
    debug!("Structuring {} lines of text", doc.lines().len());

    let title = {
        let doc = Arc::clone(&doc);
        spawn_blocking(move || extract_title(&doc))
    };
    let times = {
        let doc = Arc::clone(&doc);
        spawn_blocking(move || extract_times(&doc))
    };
    let servings = {
        let doc = Arc::clone(&doc);
        spawn_blocking(move || extract_servings(&doc))
    };
    let ingredients = {
        let doc = Arc::clone(&doc);
        spawn_blocking(move || extract_ingredients(&doc))
    };
    let instructions = {
        let doc = Arc::clone(&doc);
        spawn_blocking(move || extract_instructions(&doc))
    };

    let (title, times, servings, ingredients, instructions) =
        tokio::join!(title, times, servings, ingredients, instructions);

    build_recipe(
        or_default("title", title, || UNTITLED_RECIPE.to_string()),
        or_default("times", times, TimeFields::default),
        or_default("servings", servings, String::new),
        or_default("ingredients", ingredients, Vec::<IngredientLine>::new),
        or_default("instructions", instructions, || {
            INSTRUCTIONS_PLACEHOLDER.to_string()
        }),
    )
}

/// Same extraction as [`process`], run in sequence on the calling thread.
pub fn parse(text: &str) -> Recipe {
    let doc = Document::new(text);
    build_recipe(
        extract_title(&doc),
        extract_times(&doc),
        extract_servings(&doc),
        extract_ingredients(&doc),
        extract_instructions(&doc),
    )
}

fn or_default<T>(field: &str, joined: Result<T, JoinError>, default: impl FnOnce() -> T) -> T {
    joined.unwrap_or_else(|e| {
        warn!("{} extractor failed, leaving field empty: {}", field, e);
        default()
    })
}

fn build_recipe(
    title: String,
    times: TimeFields,
    servings: String,
    ingredients: Vec<IngredientLine>,
    instructions: String,
) -> Recipe {
    let (prep_time, cook_time, total_time) = times.with_derived_total().render();

    Recipe {
        title,
        prep_time,
        cook_time,
        total_time,
        servings,
        ingredients,
        instructions,
        diet_type: String::new(),
        meal_type: String::new(),
    }
}

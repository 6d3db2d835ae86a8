pub mod builder;
pub mod config;
pub mod error;
pub mod images_to_text;
pub mod model;
pub mod pipelines;
pub mod text_to_recipe;
pub mod uniffi_bindings;

pub use builder::{RecipeScanner, RecipeScannerBuilder};
pub use config::{OcrConfig, PreprocessConfig, ScanConfig};
pub use error::ImportError;
pub use images_to_text::{
    GoogleVisionRecognizer, ImagePreprocessor, ImageSource, RecognitionSession, Recognizer,
};
pub use model::{IngredientLine, RawPage, Recipe, INSTRUCTIONS_PLACEHOLDER, UNTITLED_RECIPE};

/// Structure already-recognized recipe text into a [`Recipe`].
///
/// Never fails: fields that can't be located are left empty.
///
/// # Example
/// ```
/// # #[tokio::main]
/// # async fn main() {
/// let recipe = recipe_ocr_import::recipe_from_text("Pancakes\nServes 4").await;
/// assert_eq!(recipe.title, "Pancakes");
/// assert_eq!(recipe.servings, "4");
/// # }
/// ```
pub async fn recipe_from_text(text: &str) -> Recipe {
    pipelines::text::process(text).await
}

/// Blocking counterpart of [`recipe_from_text`] for callers without a
/// runtime.
pub fn parse_recipe_text(text: &str) -> Recipe {
    pipelines::text::parse(text)
}

/// Recognize `images` with `recognizer` and structure the combined text.
///
/// Images are read as consecutive pages in the given order. An image that
/// fails to load or recognize is logged and counts as an empty page.
pub async fn recipe_from_images(
    images: &[ImageSource],
    recognizer: &dyn Recognizer,
    preprocess: &PreprocessConfig,
) -> Recipe {
    pipelines::image::process(images, recognizer, preprocess).await
}

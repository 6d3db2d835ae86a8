//! UniFFI bindings for recipe-ocr-import
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;

use crate::{ImportError, IngredientLine, Recipe};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub amount: String,
    pub unit: String,
    pub ingredient_name: String,
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub title: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: String,
    pub ingredients: Vec<FfiIngredient>,
    /// Numbered steps separated by blank lines
    pub instructions: String,
    /// Always empty, left for manual classification
    pub diet_type: String,
    /// Always empty, left for manual classification
    pub meal_type: String,
}

impl From<IngredientLine> for FfiIngredient {
    fn from(line: IngredientLine) -> Self {
        FfiIngredient {
            amount: line.amount,
            unit: line.unit,
            ingredient_name: line.ingredient_name,
        }
    }
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            title: recipe.title,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            total_time: recipe.total_time,
            servings: recipe.servings,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            instructions: recipe.instructions,
            diet_type: recipe.diet_type,
            meal_type: recipe.meal_type,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiImportError {
    /// Recognition engine failed
    RecognitionError { message: String },
    /// Image could not be read or decoded
    ImageError { message: String },
    /// Builder configuration error
    BuilderError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiImportError::RecognitionError { message } => {
                write!(f, "Recognition error: {}", message)
            }
            FfiImportError::ImageError { message } => write!(f, "Image error: {}", message),
            FfiImportError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiImportError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiImportError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiImportError {}

impl From<ImportError> for FfiImportError {
    fn from(err: ImportError) -> Self {
        let message = err.to_string();
        match err {
            ImportError::Recognition(_) | ImportError::Http(_) => {
                FfiImportError::RecognitionError { message }
            }
            ImportError::Preprocess(_) | ImportError::Io(_) | ImportError::Base64(_) => {
                FfiImportError::ImageError { message }
            }
            ImportError::BuilderError(msg) => FfiImportError::BuilderError { message: msg },
            ImportError::EnvError(_) | ImportError::ConfigError(_) => {
                FfiImportError::ConfigError { message }
            }
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiImportError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiImportError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Structure already-recognized recipe text
///
/// # Arguments
/// * `text` - Raw recognized text, possibly several pages joined together
///
/// # Returns
/// An `FfiRecipe`; fields that couldn't be located are empty
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe_text(text: String) -> FfiRecipe {
    crate::parse_recipe_text(&text).into()
}

/// Recognize recipe images with Google Vision and structure the result
///
/// # Arguments
/// * `image_paths` - Image files, in page order
/// * `api_key` - Optional Google Vision API key (uses config or GOOGLE_API_KEY if not specified)
///
/// # Returns
/// An `FfiRecipe` built from every page that could be recognized
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn scan_recipe_images(
    image_paths: Vec<String>,
    api_key: Option<String>,
) -> Result<FfiRecipe, FfiImportError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let mut builder = crate::RecipeScanner::builder();
        for path in image_paths {
            builder = builder.image(path);
        }
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }

        let recipe = builder.build().await?;
        Ok(recipe.into())
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

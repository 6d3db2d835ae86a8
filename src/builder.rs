use log::debug;

use crate::config::ScanConfig;
use crate::images_to_text::{GoogleVisionRecognizer, ImageSource, Recognizer};
use crate::{pipelines, ImportError, Recipe};

/// Represents the input handed to the scanner
#[derive(Debug, Clone, Default)]
enum InputSource {
    #[default]
    None,
    /// Already-recognized recipe text
    Text(String),
    /// Images to recognize, in page order
    Images(Vec<ImageSource>),
}

/// Builder for configuring and executing a recipe scan
#[derive(Default)]
pub struct RecipeScannerBuilder {
    source: InputSource,
    conflict: bool,
    recognizer: Option<Box<dyn Recognizer>>,
    config: Option<ScanConfig>,
    api_key: Option<String>,
}

impl RecipeScannerBuilder {
    fn push_image(mut self, image: ImageSource) -> Self {
        match self.source {
            InputSource::None => self.source = InputSource::Images(vec![image]),
            InputSource::Images(ref mut images) => images.push(image),
            InputSource::Text(_) => self.conflict = true,
        }
        self
    }

    /// Add an image file. Call repeatedly for multi-page recipes; pages
    /// are read in the order they were added.
    ///
    /// # Example
    /// ```
    /// use recipe_ocr_import::RecipeScanner;
    ///
    /// let builder = RecipeScanner::builder()
    ///     .image("/path/to/page-1.jpg")
    ///     .image("/path/to/page-2.jpg");
    /// ```
    pub fn image(self, path: impl Into<String>) -> Self {
        self.push_image(ImageSource::Path(path.into()))
    }

    /// Add an image already loaded in memory
    pub fn image_bytes(self, bytes: impl Into<Vec<u8>>) -> Self {
        self.push_image(ImageSource::Bytes(bytes.into()))
    }

    /// Add a base64-encoded image
    pub fn image_base64(self, data: impl Into<String>) -> Self {
        self.push_image(ImageSource::Base64(data.into()))
    }

    /// Structure text that was already recognized, skipping OCR
    ///
    /// # Example
    /// ```
    /// use recipe_ocr_import::RecipeScanner;
    ///
    /// let builder = RecipeScanner::builder()
    ///     .text("Pancakes\nServes 4\nIngredients:\n2 eggs");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        match self.source {
            InputSource::Images(_) => self.conflict = true,
            _ => self.source = InputSource::Text(text.into()),
        }
        self
    }

    /// Use a custom recognition engine instead of Google Vision
    pub fn recognizer(mut self, recognizer: impl Recognizer + 'static) -> Self {
        self.recognizer = Some(Box::new(recognizer));
        self
    }

    /// Use this configuration instead of loading config.toml and the
    /// environment
    pub fn config(mut self, config: ScanConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the Google Vision API key directly
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build and execute the scan
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - Both text and images were supplied
    /// - Configuration could not be loaded
    /// - No recognizer was given and no Google Vision API key is available
    ///
    /// Failures on individual images are not errors; those pages are
    /// treated as empty.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_ocr_import::RecipeScanner;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeScanner::builder()
    ///     .image("/path/to/recipe.jpg")
    ///     .build()
    ///     .await?;
    /// println!("{}", recipe.title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Recipe, ImportError> {
        if self.conflict {
            return Err(ImportError::BuilderError(
                "Use either .text() or .image(), not both".to_string(),
            ));
        }

        let images = match self.source {
            InputSource::None => {
                debug!("No input supplied, returning empty recipe");
                return Ok(pipelines::text::process("").await);
            }
            InputSource::Text(text) => return Ok(pipelines::text::process(&text).await),
            InputSource::Images(images) => images,
        };

        let mut config = match self.config {
            Some(config) => config,
            None => ScanConfig::load()?,
        };
        if let Some(key) = self.api_key {
            config.ocr.api_key = Some(key);
        }

        let recognizer: Box<dyn Recognizer> = match self.recognizer {
            Some(recognizer) => recognizer,
            None => Box::new(GoogleVisionRecognizer::new(&config.ocr)?),
        };

        Ok(pipelines::image::process(&images, recognizer.as_ref(), &config.preprocess).await)
    }
}

/// Main entry point for the builder API
pub struct RecipeScanner;

impl RecipeScanner {
    /// Creates a new builder for scanning recipes
    ///
    /// # Example
    /// ```
    /// use recipe_ocr_import::RecipeScanner;
    ///
    /// let builder = RecipeScanner::builder();
    /// ```
    pub fn builder() -> RecipeScannerBuilder {
        RecipeScannerBuilder::default()
    }
}

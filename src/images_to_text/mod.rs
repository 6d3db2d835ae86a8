mod ocr;
mod preprocess;

pub use ocr::{recognize_image, GoogleVisionRecognizer, RecognitionSession, Recognizer};
pub use preprocess::ImagePreprocessor;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::ImportError;

/// Represents the source of an image for OCR processing
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image from a file path
    Path(String),
    /// Image as base64-encoded data
    Base64(String),
    /// Image bytes already in memory
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Raw bytes of the image
    pub async fn load(&self) -> Result<Vec<u8>, ImportError> {
        match self {
            ImageSource::Path(path) => Ok(tokio::fs::read(path).await?),
            ImageSource::Base64(data) => Ok(STANDARD.decode(data.trim())?),
            ImageSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    /// Short description for log messages
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.clone(),
            ImageSource::Base64(_) => "base64-image".to_string(),
            ImageSource::Bytes(bytes) => format!("in-memory image ({} bytes)", bytes.len()),
        }
    }
}

/// Main entry point for extracting text from an image source
///
/// Loads the image, enhances it and runs it through `recognizer`.
///
/// # Errors
/// Returns an error if the image can't be read or decoded, or if
/// recognition fails.
pub async fn extract(
    source: &ImageSource,
    preprocessor: &ImagePreprocessor,
    recognizer: &dyn Recognizer,
) -> Result<String, ImportError> {
    let bytes = source.load().await?;
    let enhanced = preprocessor.process(&bytes)?;
    recognize_image(recognizer, &enhanced).await
}

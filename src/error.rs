use thiserror::Error;

/// Errors that can occur while turning recipe images into a recipe record
///
/// Only the image-facing edges are fallible. Once text exists, the
/// structuring stages always produce a `Recipe`.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The recognition engine failed or returned no usable text
    #[error("Recognition failed: {0}")]
    Recognition(String),

    /// The image could not be decoded or re-encoded
    #[error("Failed to preprocess image: {0}")]
    Preprocess(#[from] image::ImageError),

    /// Reading an image file failed
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error talking to the recognition service
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Inline image data was not valid base64
    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

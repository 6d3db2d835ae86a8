use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use log::debug;

use crate::config::PreprocessConfig;
use crate::error::ImportError;

/// Enhances photographed pages before they are sent for recognition
///
/// Phone photos of cookbooks tend to be dim and low-contrast. The image is
/// converted to grayscale, its contrast stretched and brightness lifted,
/// then re-encoded as lossless PNG.
#[derive(Debug, Clone, Default)]
pub struct ImagePreprocessor {
    config: PreprocessConfig,
}

impl ImagePreprocessor {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Decode, enhance and re-encode `bytes`.
    ///
    /// # Errors
    /// Returns `ImportError::Preprocess` if the bytes are not a decodable
    /// image. When preprocessing is disabled the bytes pass through
    /// unchecked.
    pub fn process(&self, bytes: &[u8]) -> Result<Vec<u8>, ImportError> {
        if !self.config.enabled {
            return Ok(bytes.to_vec());
        }

        let decoded = image::load_from_memory(bytes)?;
        debug!(
            "Preprocessing {}x{} image (contrast {}, brightness {})",
            decoded.width(),
            decoded.height(),
            self.config.contrast,
            self.config.brightness
        );

        let enhanced = self.enhance(&decoded);

        let mut buf = Vec::new();
        enhanced.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    fn enhance(&self, img: &DynamicImage) -> DynamicImage {
        img.grayscale()
            .adjust_contrast(self.config.contrast)
            .brighten(self.config.brightness)
    }
}

use futures::future::join_all;
use log::{info, warn};

use crate::config::PreprocessConfig;
use crate::images_to_text::{self, ImagePreprocessor, ImageSource, Recognizer};
use crate::model::{RawPage, Recipe};

/// Recognize every image concurrently.
///
/// Pages come back in the order the images were given. An image that
/// can't be read, decoded or recognized contributes an empty page.
pub async fn recognize_pages(
    images: &[ImageSource],
    recognizer: &dyn Recognizer,
    preprocessor: &ImagePreprocessor,
) -> Vec<RawPage> {
    let pending = images.iter().enumerate().map(|(position, image)| async move {
        let text = match images_to_text::extract(image, preprocessor, recognizer).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Recognition failed for {} with {}: {}",
                    image.describe(),
                    recognizer.engine_name(),
                    e
                );
                String::new()
            }
        };
        RawPage::new(position, text)
    });

    join_all(pending).await
}

pub async fn process(
    images: &[ImageSource],
    recognizer: &dyn Recognizer,
    preprocess: &PreprocessConfig,
) -> Recipe {
    let preprocessor = ImagePreprocessor::new(preprocess.clone());
    let pages = recognize_pages(images, recognizer, &preprocessor).await;

    let combined = RawPage::concatenate(&pages);
    info!(
        "Recognized {} characters from {} image(s)",
        combined.len(),
        images.len()
    );

    super::text::process(&combined).await
}

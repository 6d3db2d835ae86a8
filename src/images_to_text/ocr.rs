use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::OcrConfig;
use crate::error::ImportError;

/// A recognition engine that turns image bytes into raw text
///
/// Engines hand out sessions; each recognition runs inside one session and
/// the session is released when it is dropped, whichever way the call ends.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Engine name used in log messages
    fn engine_name(&self) -> &str;

    /// Acquire a session (load models, open connections, ...)
    async fn open_session(&self) -> Result<Box<dyn RecognitionSession>, ImportError>;
}

/// A live recognition session, released on drop
#[async_trait]
pub trait RecognitionSession: Send {
    /// Recognize the text in one image. An image without text yields an
    /// empty string.
    async fn recognize(&mut self, image: &[u8]) -> Result<String, ImportError>;
}

/// Run a single recognition inside its own session.
pub async fn recognize_image(
    recognizer: &dyn Recognizer,
    image: &[u8],
) -> Result<String, ImportError> {
    let mut session = recognizer.open_session().await?;
    debug!("Opened {} session", recognizer.engine_name());
    session.recognize(image).await
}

/// Recognizer backed by the Google Cloud Vision `TEXT_DETECTION` API
#[derive(Debug, Clone)]
pub struct GoogleVisionRecognizer {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GoogleVisionRecognizer {
    /// Create a recognizer from configuration
    ///
    /// # Errors
    /// Returns `ImportError::EnvError` if no API key is configured and the
    /// GOOGLE_API_KEY environment variable is not set.
    pub fn new(config: &OcrConfig) -> Result<Self, ImportError> {
        let api_key = match &config.api_key {
            Some(key) => key.clone(),
            None => std::env::var("GOOGLE_API_KEY")?,
        };

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout),
        })
    }
}

#[async_trait]
impl Recognizer for GoogleVisionRecognizer {
    fn engine_name(&self) -> &str {
        "google-vision"
    }

    async fn open_session(&self) -> Result<Box<dyn RecognitionSession>, ImportError> {
        let client = Client::builder().timeout(self.timeout).build()?;
        Ok(Box::new(VisionSession {
            client,
            url: format!("{}/v1/images:annotate?key={}", self.base_url, self.api_key),
        }))
    }
}

struct VisionSession {
    client: Client,
    url: String,
}

#[async_trait]
impl RecognitionSession for VisionSession {
    async fn recognize(&mut self, image: &[u8]) -> Result<String, ImportError> {
        let request_body = json!({
            "requests": [{
                "image": {
                    "content": STANDARD.encode(image)
                },
                "features": [{
                    "type": "TEXT_DETECTION"
                }]
            }]
        });

        debug!("Sending OCR request to Google Vision API");

        let response = self
            .client
            .post(&self.url)
            .header("Accept-Encoding", "identity")
            .json(&request_body)
            .send()
            .await?;

        // Check for HTTP errors
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(ImportError::Recognition(format!(
                "Google Vision API error ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;
        parse_annotation(&response_body)
    }
}

impl Drop for VisionSession {
    fn drop(&mut self) {
        debug!("Released Google Vision session");
    }
}

/// Pull the detected text out of an `images:annotate` response
fn parse_annotation(body: &Value) -> Result<String, ImportError> {
    let first = &body["responses"][0];

    if let Some(message) = first["error"]["message"].as_str() {
        return Err(ImportError::Recognition(message.to_string()));
    }

    // Vision omits fullTextAnnotation entirely when the image has no text
    let text = first["fullTextAnnotation"]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    debug!("Extracted text from image: {} characters", text.len());

    Ok(text)
}

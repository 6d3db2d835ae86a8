use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level configuration for recipe scanning
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScanConfig {
    /// Recognition service settings
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Image enhancement applied before recognition
    #[serde(default)]
    pub preprocess: PreprocessConfig,
}

/// Settings for the Google Cloud Vision recognizer
#[derive(Debug, Deserialize, Clone)]
pub struct OcrConfig {
    /// API key (falls back to the GOOGLE_API_KEY environment variable)
    pub api_key: Option<String>,
    /// Base URL of the Vision API, overridable for proxies and tests
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Contrast/brightness enhancement settings
#[derive(Debug, Deserialize, Clone)]
pub struct PreprocessConfig {
    /// Whether images are enhanced at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Contrast adjustment, positive values increase contrast
    #[serde(default = "default_contrast")]
    pub contrast: f32,
    /// Brightness shift added to every pixel
    #[serde(default = "default_brightness")]
    pub brightness: i32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            contrast: default_contrast(),
            brightness: default_brightness(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://vision.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_enabled() -> bool {
    true
}

fn default_contrast() -> f32 {
    20.0
}

fn default_brightness() -> i32 {
    10
}

impl ScanConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_OCR__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_OCR__OCR__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScanConfig::load`] for the precedence rules.
pub fn load_config() -> Result<ScanConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_OCR__PREPROCESS__CONTRAST
        .add_source(
            Environment::with_prefix("RECIPE_OCR")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

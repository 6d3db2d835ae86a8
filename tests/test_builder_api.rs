use async_trait::async_trait;
use mockito::Matcher;
use recipe_ocr_import::{
    ImportError, OcrConfig, PreprocessConfig, RecipeScanner, RecognitionSession, Recognizer,
    ScanConfig, UNTITLED_RECIPE,
};

struct FixedText(&'static str);

struct FixedSession(&'static str);

#[async_trait]
impl Recognizer for FixedText {
    fn engine_name(&self) -> &str {
        "fixed"
    }

    async fn open_session(&self) -> Result<Box<dyn RecognitionSession>, ImportError> {
        Ok(Box::new(FixedSession(self.0)))
    }
}

#[async_trait]
impl RecognitionSession for FixedSession {
    async fn recognize(&mut self, _image: &[u8]) -> Result<String, ImportError> {
        Ok(self.0.to_string())
    }
}

fn test_config() -> ScanConfig {
    ScanConfig {
        ocr: OcrConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        },
        preprocess: PreprocessConfig {
            enabled: false,
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn test_builder_text() {
    let recipe = RecipeScanner::builder()
        .text("Pancakes\nServes 4\nIngredients:\n2 eggs\n1 cup milk")
        .build()
        .await
        .unwrap();

    assert_eq!(recipe.title, "Pancakes");
    assert_eq!(recipe.servings, "4");
    assert_eq!(recipe.ingredients.len(), 2);
}

#[tokio::test]
async fn test_builder_images_with_custom_recognizer() {
    let recipe = RecipeScanner::builder()
        .image_bytes(b"page".to_vec())
        .recognizer(FixedText("Fruit Salad\nServes: 2-3\n1 apple\n1 pear"))
        .config(test_config())
        .build()
        .await
        .unwrap();

    assert_eq!(recipe.title, "Fruit Salad");
    assert_eq!(recipe.servings, "2-3");
    assert_eq!(recipe.ingredients.len(), 2);
}

#[tokio::test]
async fn test_builder_nothing_supplied() {
    let recipe = RecipeScanner::builder().build().await.unwrap();

    assert_eq!(recipe.title, UNTITLED_RECIPE);
    assert!(recipe.ingredients.is_empty());
}

#[tokio::test]
async fn test_builder_text_and_image_conflict() {
    let result = RecipeScanner::builder()
        .text("Soup")
        .image("/path/to/soup.jpg")
        .build()
        .await;
    assert!(matches!(result, Err(ImportError::BuilderError(_))));

    let result = RecipeScanner::builder()
        .image("/path/to/soup.jpg")
        .text("Soup")
        .build()
        .await;
    assert!(matches!(result, Err(ImportError::BuilderError(_))));
}

#[tokio::test]
async fn test_builder_uses_google_vision_by_default() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/images:annotate")
        .match_query(Matcher::UrlEncoded("key".into(), "override-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"responses":[{"fullTextAnnotation":{"text":"Garlic Bread\nIngredients\n1 baguette"}}]}"#)
        .expect(2)
        .create_async()
        .await;

    let mut config = test_config();
    config.ocr.base_url = server.url();

    let recipe = RecipeScanner::builder()
        .image_base64("aW1hZ2U=")
        .image_bytes(b"second page".to_vec())
        .config(config)
        .api_key("override-key")
        .build()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(recipe.title, "Garlic Bread");
}

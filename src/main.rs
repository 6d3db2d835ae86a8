use log::{debug, info};
use std::env;

use recipe_ocr_import::RecipeScanner;

const USAGE: &str = "Usage: recipe-ocr [--text FILE] [IMAGE...]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the inputs from command-line arguments
    let mut args = env::args().skip(1);
    let mut builder = RecipeScanner::builder();
    let mut inputs = 0;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => {
                let path = args.next().ok_or(USAGE)?;
                let text = tokio::fs::read_to_string(&path).await?;
                debug!("Read {} bytes of text from {}", text.len(), path);
                builder = builder.text(text);
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => builder = builder.image(arg),
        }
        inputs += 1;
    }

    if inputs == 0 {
        return Err(USAGE.into());
    }

    let recipe = builder.build().await?;
    info!("Extracted recipe '{}'", recipe.title);

    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}

//! Example: Test Gemini image generation
//!
//! Requests one food photo from the primary image model and saves the
//! decoded payload to disk.
//!
//! Usage:
//!   cargo run --example image_generation
//!
//! Prerequisites:
//!   - .env file with GEMINI_API_KEY

use base64::Engine;
use flavorforge::services::gemini::{GeminiClient, GenerativeClient, PRIMARY_IMAGE_MODEL};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    println!("🎨 Gemini Image Generation Test\n");

    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY not set");
    let client = GeminiClient::new(api_key);

    let prompt = "Create a beautiful, appetizing photo of a plated fusion dish combining \
                  ramen and carbonara. Style: food photography, professional lighting, \
                  appetizing presentation.";

    println!("📝 Prompt: {prompt}");
    println!("🔄 Calling {PRIMARY_IMAGE_MODEL}...\n");

    let parts = client.generate_parts(PRIMARY_IMAGE_MODEL, prompt).await?;

    for part in &parts {
        if let Some(text) = &part.text {
            println!("📝 Text part: {text}");
        } else if let Some(inline) = &part.inline_data {
            println!(
                "🎯 Found image data ({} base64 chars, mime {:?})",
                inline.data.len(),
                inline.mime_type
            );
            let bytes = base64::engine::general_purpose::STANDARD.decode(&inline.data)?;
            std::fs::write("gemini-food-image.png", &bytes)?;
            println!("💾 Image saved as gemini-food-image.png");
            println!("🎉 Image generation working!");
            return Ok(());
        }
    }

    println!("⚠️ No image found in response");
    Ok(())
}

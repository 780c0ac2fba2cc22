//! Example: Test Gemini text generation
//!
//! Verifies that your Gemini credentials are configured correctly by making
//! a simple text request, then probes the image-capable model ids used by
//! the recipe pipeline.
//!
//! Usage:
//!   cargo run --example text_models
//!
//! Prerequisites:
//!   - .env file with GEMINI_API_KEY

use flavorforge::services::gemini::{GeminiClient, GenerativeClient, TEXT_MODEL};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    println!("🤖 Gemini Connection Test\n");

    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY not set");
    println!("🔑 API key: {}***\n", &api_key[..10.min(api_key.len())]);

    let client = GeminiClient::new(api_key);

    println!("🔄 Testing text generation with {TEXT_MODEL}");
    match client
        .generate_text(TEXT_MODEL, "Hello, can you generate a simple text response?")
        .await
    {
        Ok(text) => println!("✅ Text generation successful: {text}"),
        Err(e) => {
            println!("❌ Text generation failed: {e}");
            println!("\n🔍 Troubleshooting:");
            println!("   1. Verify GEMINI_API_KEY is correct");
            println!("   2. Check the key hasn't expired");
            println!("   3. Ensure the Generative Language API is enabled");
            return Err(e.into());
        }
    }

    // Probe the alternate model ids the image fallback chain relies on.
    for model in [
        "gemini-2.0-flash-preview-image-generation",
        "gemini-2.0-flash",
        "gemini-1.5-flash-exp",
        "gemini-1.5-pro",
    ] {
        println!("\n🔄 Trying model: {model}");
        match client.generate_text(model, "Reply with a single word.").await {
            Ok(_) => println!("✅ {model} responded"),
            Err(e) => println!("❌ {model} failed: {e}"),
        }
    }

    println!("\n🎉 Gemini connectivity check complete");
    Ok(())
}

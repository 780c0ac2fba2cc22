//! Image enrichment for generated recipes.
//!
//! Every recipe gets an image through an ordered chain of strategies:
//! primary image model, secondary image model, then a deterministic stock
//! photo URL derived from the title. Model failures of any kind degrade to
//! the next stage; the chain as a whole never fails.

use base64::Engine;
use metrics::counter;
use strum::Display;
use tracing::{debug, info, warn};

use crate::models::recipe::{EnrichedRecipe, Recipe};
use crate::services::gemini::{
    ContentPart, GenerativeClient, PRIMARY_IMAGE_MODEL, SECONDARY_IMAGE_MODEL,
};

/// Model attempts in order; the first inline image wins.
const MODEL_CHAIN: [&str; 2] = [PRIMARY_IMAGE_MODEL, SECONDARY_IMAGE_MODEL];

const STOCK_PHOTO_BASE: &str = "https://source.unsplash.com/400x300";

/// Cuisine tags recognized in recipe titles for the stock photo query,
/// checked in order; first substring match wins.
#[derive(Debug, Clone, Copy, Display)]
#[strum(serialize_all = "lowercase")]
enum CuisineTag {
    Asian,
    Italian,
    Mexican,
    Indian,
}

const CUISINE_TAGS: [CuisineTag; 4] = [
    CuisineTag::Asian,
    CuisineTag::Italian,
    CuisineTag::Mexican,
    CuisineTag::Indian,
];

/// Annotate one recipe with an image URL and a generated flag. Never fails:
/// every failure path terminates in the deterministic stock photo URL.
pub async fn enrich_recipe(client: &dyn GenerativeClient, recipe: Recipe) -> EnrichedRecipe {
    let prompt = build_image_prompt(&recipe);

    for model in MODEL_CHAIN {
        match client.generate_parts(model, &prompt).await {
            Ok(parts) => {
                if let Some(image_url) = first_inline_image(&parts) {
                    info!(recipe = %recipe.title, model, "image generated");
                    let source = if model == PRIMARY_IMAGE_MODEL {
                        "primary"
                    } else {
                        "fallback_model"
                    };
                    counter!("recipe_images_total", "source" => source).increment(1);
                    return EnrichedRecipe {
                        recipe,
                        image_url,
                        image_generated: true,
                    };
                }
                debug!(recipe = %recipe.title, model, "no inline image in response, trying next stage");
            }
            Err(e) => {
                warn!(recipe = %recipe.title, model, error = %e, "image generation attempt failed");
            }
        }
    }

    counter!("recipe_images_total", "source" => "stock_url").increment(1);
    let image_url = fallback_image_url(&recipe.title);
    EnrichedRecipe {
        recipe,
        image_url,
        image_generated: false,
    }
}

/// Food-photography prompt for the image models.
pub fn build_image_prompt(recipe: &Recipe) -> String {
    format!(
        "Create a beautiful, appetizing photo of {}. This is a fusion dish that combines {}. \
         The image should be high quality, well-lit, and show the finished dish on a plate. \
         Style: food photography, professional lighting, appetizing presentation.",
        recipe.title,
        recipe.ingredients.join(", ")
    )
}

/// First inline-data part of the response, encoded as a data URI.
fn first_inline_image(parts: &[ContentPart]) -> Option<String> {
    let inline = parts.iter().find_map(|part| part.inline_data.as_ref())?;
    let mime = inline
        .mime_type
        .clone()
        .unwrap_or_else(|| sniff_mime(&inline.data));
    Some(format!("data:{};base64,{}", mime, inline.data))
}

/// Guess the payload's MIME type when the model omits it.
fn sniff_mime(b64: &str) -> String {
    base64::engine::general_purpose::STANDARD
        .decode(b64)
        .ok()
        .and_then(|bytes| image::guess_format(&bytes).ok())
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| "image/png".to_string())
}

/// Deterministic stock photo URL from title keywords: the first three words
/// of the lowercased title plus a cuisine tag.
pub fn fallback_image_url(title: &str) -> String {
    let lowered = title.to_lowercase();
    let keywords = lowered
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(",");
    let cuisine = CUISINE_TAGS
        .iter()
        .find(|tag| lowered.contains(&tag.to_string()))
        .map(|tag| tag.to_string())
        .unwrap_or_else(|| "food".to_string());
    format!("{STOCK_PHOTO_BASE}/?{cuisine},{keywords},dish")
}

//! The recipe generation pipeline: prompt construction, text model call,
//! extraction/validation, and per-recipe image enrichment.

use metrics::histogram;
use tracing::info;

use crate::models::recipe::{EnrichedRecipe, RecipeRequest};
use crate::services::gemini::{GeminiError, GenerativeClient, TEXT_MODEL};
use crate::services::images;
use crate::services::parse::{self, RecipeParseError};
use crate::services::prompt;

/// Errors fatal to a generation request. Image-stage failures never appear
/// here; they are absorbed by the enrichment fallback chain.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Gemini API error: {0}")]
    Collaborator(#[from] GeminiError),

    #[error(transparent)]
    Parse(#[from] RecipeParseError),
}

/// Run the full pipeline for one request. All-or-nothing at the text
/// stage; best-effort per recipe at the image stage.
pub async fn generate_recipes(
    client: &dyn GenerativeClient,
    request: &RecipeRequest,
) -> Result<Vec<EnrichedRecipe>, GenerationError> {
    let prompt = prompt::build_recipe_prompt(request);
    info!(model = TEXT_MODEL, cuisines = ?request.cuisines, "requesting recipe generation");

    let start = std::time::Instant::now();
    let text = client.generate_text(TEXT_MODEL, &prompt).await?;
    info!(response_len = text.len(), "text model responded");

    let recipes = parse::extract_recipe_array(&text)?;

    // Recipes are enriched in order, one at a time; a failed image for one
    // recipe has no effect on the others.
    let mut enriched = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        enriched.push(images::enrich_recipe(client, recipe).await);
    }

    histogram!("recipe_generation_seconds").record(start.elapsed().as_secs_f64());
    info!(
        images_generated = enriched.iter().filter(|r| r.image_generated).count(),
        total = enriched.len(),
        "recipe generation complete"
    );
    Ok(enriched)
}

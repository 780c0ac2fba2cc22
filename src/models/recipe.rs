use garde::Validate;
use serde::{Deserialize, Serialize};

/// Incoming recipe generation request.
///
/// The enumerated fields (meal type, time limit, difficulty, spice level)
/// are chosen in the UI from fixed catalogs and passed through as opaque
/// strings; the server does not restrict their values. The first cuisine is
/// the base cuisine, so the list must not be empty.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[garde(skip)]
    #[serde(default)]
    pub main_ingredients: String,

    #[garde(length(min = 1))]
    pub cuisines: Vec<String>,

    #[garde(skip)]
    pub meal_type: String,

    #[garde(skip)]
    pub time_limit: String,

    #[garde(skip)]
    pub difficulty: String,

    #[garde(skip)]
    pub spice_level: String,

    #[garde(skip)]
    #[serde(default)]
    pub equipment: Vec<String>,
}

/// One recipe as produced by the text model.
///
/// Fields are opaque once the three-element array shape has been validated;
/// a field absent from an element defaults to empty rather than failing the
/// request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub spice: String,
    #[serde(default)]
    pub why_it_works: String,
    #[serde(default)]
    pub image_prompt: String,
}

/// A recipe annotated with the outcome of image enrichment.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,

    /// Data URI of the generated image, or a stock photo URL.
    #[serde(rename = "imageUrl")]
    pub image_url: String,

    /// True when a model produced the image, false for the stock fallback.
    #[serde(rename = "imageGenerated")]
    pub image_generated: bool,
}

/// Successful response: always exactly three enriched recipes.
#[derive(Debug, Serialize)]
pub struct GenerateRecipesResponse {
    pub success: bool,
    pub recipes: Vec<EnrichedRecipe>,
}

/// Uniform payload for request-fatal errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub details: String,
}

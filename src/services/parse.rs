//! Extraction of the recipe array from free-form model output.
//!
//! The model is asked for a bare JSON array but routinely wraps it in
//! prose, so the span from the first `[` to the last `]` is taken as the
//! payload. Pure functions, unit-tested against adversarial outputs.

use crate::models::recipe::Recipe;

/// A successful generation always yields exactly this many recipes.
pub const RECIPE_COUNT: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum RecipeParseError {
    #[error("No valid JSON found in response")]
    NoJsonArray,

    #[error("Failed to parse recipe JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid recipes format")]
    InvalidShape,
}

/// Extract, parse, and shape-check the recipe array from model output.
///
/// The cardinality check runs before element deserialization: a well-formed
/// array of the wrong length is always `InvalidShape`, regardless of what
/// its elements contain.
pub fn extract_recipe_array(text: &str) -> Result<Vec<Recipe>, RecipeParseError> {
    let start = text.find('[').ok_or(RecipeParseError::NoJsonArray)?;
    let end = text
        .rfind(']')
        .filter(|&end| end > start)
        .ok_or(RecipeParseError::NoJsonArray)?;

    let value: serde_json::Value = serde_json::from_str(&text[start..=end])?;
    let items = value.as_array().ok_or(RecipeParseError::InvalidShape)?;
    if items.len() != RECIPE_COUNT {
        return Err(RecipeParseError::InvalidShape);
    }

    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(RecipeParseError::InvalidJson))
        .collect()
}

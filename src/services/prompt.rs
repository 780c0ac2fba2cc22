//! Prompt construction for recipe generation.
//!
//! Pure string building so the wording can be asserted in tests without any
//! network involvement. The prompt demands exact, verbatim use of the
//! user's main ingredients; substitution with similar ingredients is not
//! allowed.

use crate::models::recipe::RecipeRequest;

const DEFAULT_INGREDIENTS: &str = "Any available ingredients";
const DEFAULT_EQUIPMENT: &str = "Basic kitchen equipment";

/// Build the text-model prompt embedding every request field, the strict
/// verbatim-ingredient requirement, and the expected JSON output shape.
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let all_cuisines = request.cuisines.join(" + ");
    let base_cuisine = request.cuisines.first().map(String::as_str).unwrap_or_default();
    let additional_cuisines = request
        .cuisines
        .iter()
        .skip(1)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let main_ingredients = if request.main_ingredients.is_empty() {
        DEFAULT_INGREDIENTS
    } else {
        request.main_ingredients.as_str()
    };
    let equipment = if request.equipment.is_empty() {
        DEFAULT_EQUIPMENT.to_string()
    } else {
        request.equipment.join(", ")
    };

    format!(
        r#"Create 3 unique fusion recipes that combine {all_cuisines} cuisines.

CRITICAL REQUIREMENTS:
- Main ingredients: {main_ingredients} - You MUST use these EXACT ingredients as specified. If user says "rice", use "rice" not "jasmine rice" or "brown rice". If user says "chicken", use "chicken" not "chicken breast" or "chicken thighs". Use the ingredients exactly as written.
- Base cuisine: {base_cuisine}
- Additional cuisines: {additional_cuisines}
- Meal type: {meal_type}
- Time limit: {time_limit} minutes
- Difficulty: {difficulty}
- Spice level: {spice_level}
- Available equipment: {equipment}

For each recipe, provide:
1. A creative title that reflects the fusion
2. A catchy tagline
3. Detailed ingredients list with quantities (MUST include the exact main ingredients specified by user)
4. Step-by-step cooking instructions
5. Cooking time
6. Difficulty level
7. Spice level
8. Why this fusion works (culinary explanation)
9. A detailed image prompt for generating a beautiful food photo

Format the response as a JSON array with this structure:
[
  {{
    "title": "Recipe Title",
    "tagline": "Catchy description",
    "ingredients": ["ingredient 1", "ingredient 2", ...],
    "steps": ["step 1", "step 2", ...],
    "time": "X min",
    "difficulty": "Easy/Medium/Advanced",
    "spice": "Mild/Medium/Hot/Inferno",
    "why_it_works": "Explanation of why this fusion works",
    "image_prompt": "Detailed description for image generation"
  }}
]

IMPORTANT: The main ingredients provided by the user ({main_ingredients}) must be used EXACTLY as written. Do not substitute with similar ingredients. These ingredients should be the star of each dish."#,
        meal_type = request.meal_type,
        time_limit = request.time_limit,
        difficulty = request.difficulty,
        spice_level = request.spice_level,
    )
}

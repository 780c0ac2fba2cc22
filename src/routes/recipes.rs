use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use metrics::counter;
use tracing::error;

use crate::app_state::AppState;
use crate::models::recipe::{ErrorResponse, GenerateRecipesResponse, RecipeRequest};
use crate::services::generation;

/// POST /api/generate-recipes — run the generation pipeline for one request.
///
/// Generation is all-or-nothing: any text-stage failure produces the
/// uniform error payload with a 500, never a partial recipe set.
pub async fn generate_recipes(
    State(state): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> Result<Json<GenerateRecipesResponse>, (StatusCode, Json<ErrorResponse>)> {
    counter!("recipe_requests_total").increment(1);

    if let Err(report) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                error: "Invalid request".to_string(),
                details: report.to_string(),
            }),
        ));
    }

    match generation::generate_recipes(state.gemini.as_ref(), &request).await {
        Ok(recipes) => Ok(Json(GenerateRecipesResponse {
            success: true,
            recipes,
        })),
        Err(e) => {
            counter!("recipe_requests_failed").increment(1);
            error!(error = %e, "recipe generation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: "Failed to generate recipes".to_string(),
                    details: e.to_string(),
                }),
            ))
        }
    }
}

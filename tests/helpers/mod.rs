//! Test helpers: a scripted Gemini stand-in and a server spawner.

use std::sync::Arc;

use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusBuilder;

use flavorforge::app_state::AppState;
use flavorforge::routes;
use flavorforge::services::gemini::{ContentPart, GeminiError, GenerativeClient, InlineData};

/// 1x1 red pixel PNG, base64-encoded.
pub const PIXEL_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

/// Scripted behavior for the text-generation call.
#[derive(Clone)]
pub enum TextScript {
    Reply(String),
    Fail(u16, String),
}

/// Scripted behavior for both image-generation attempts.
#[derive(Clone, Copy)]
pub enum ImageScript {
    InlinePng,
    TextOnly,
    Fail,
}

/// Stand-in for the Gemini collaborator with one script per call shape.
pub struct ScriptedGemini {
    pub text: TextScript,
    pub images: ImageScript,
}

#[async_trait]
impl GenerativeClient for ScriptedGemini {
    async fn generate_text(&self, _model: &str, _prompt: &str) -> Result<String, GeminiError> {
        match &self.text {
            TextScript::Reply(text) => Ok(text.clone()),
            TextScript::Fail(status, message) => Err(GeminiError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    async fn generate_parts(
        &self,
        _model: &str,
        _prompt: &str,
    ) -> Result<Vec<ContentPart>, GeminiError> {
        match self.images {
            ImageScript::InlinePng => Ok(vec![ContentPart {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: Some("image/png".to_string()),
                    data: PIXEL_B64.to_string(),
                }),
            }]),
            ImageScript::TextOnly => Ok(vec![ContentPart {
                text: Some("a lovely description, no pixels".to_string()),
                inline_data: None,
            }]),
            ImageScript::Fail => Err(GeminiError::Api {
                status: 500,
                message: "image backend down".to_string(),
            }),
        }
    }
}

/// Serve the full router on an ephemeral port; returns the base URL.
pub async fn serve(client: ScriptedGemini) -> String {
    let state = AppState::new(client);
    // A per-test recorder handle; no global recorder is installed.
    let prometheus = Arc::new(PrometheusBuilder::new().build_recorder().handle());
    let app = routes::router(state, prometheus);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{addr}")
}

/// A valid three-recipe model reply, wrapped in prose like the real model.
pub fn three_recipe_reply() -> String {
    r#"Here are your fusion recipes:
    [
      {"title": "Tuscan Pad Thai", "tagline": "East meets Chianti",
       "ingredients": ["chicken", "rice", "basil"], "steps": ["prep", "cook"],
       "time": "30 min", "difficulty": "Easy", "spice": "Medium",
       "why_it_works": "shared aromatics", "image_prompt": "plated noodles"},
      {"title": "Basil Chicken Risotto", "tagline": "Creamy with a kick",
       "ingredients": ["chicken", "rice", "coconut milk"], "steps": ["toast", "stir"],
       "time": "30 min", "difficulty": "Easy", "spice": "Medium",
       "why_it_works": "rice carries both", "image_prompt": "steaming bowl"},
      {"title": "Lemongrass Carbonara", "tagline": "Silky and bright",
       "ingredients": ["chicken", "rice", "lemongrass"], "steps": ["simmer", "toss"],
       "time": "25 min", "difficulty": "Easy", "spice": "Medium",
       "why_it_works": "citrus cuts the fat", "image_prompt": "twirled noodles"}
    ]
    Buon appetito!"#
        .to_string()
}

/// A well-formed request body matching the UI's field catalogs.
pub fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "mainIngredients": "chicken, rice",
        "cuisines": ["Italian", "Thai"],
        "mealType": "Dinner",
        "timeLimit": "30",
        "difficulty": "Easy",
        "spiceLevel": "Medium",
        "equipment": ["Pan"]
    })
}

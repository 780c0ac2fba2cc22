use std::sync::Arc;

use crate::services::gemini::GenerativeClient;

/// Shared application state passed to all route handlers.
///
/// The generative client sits behind a trait object so the router can be
/// wired against a scripted collaborator in tests.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<dyn GenerativeClient>,
}

impl AppState {
    pub fn new(gemini: impl GenerativeClient + 'static) -> Self {
        Self {
            gemini: Arc::new(gemini),
        }
    }
}

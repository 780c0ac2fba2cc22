use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Gemini API credential. The process refuses to start without it.
    pub gemini_api_key: String,

    /// Server bind address (e.g., "0.0.0.0:5000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

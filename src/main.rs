use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use flavorforge::app_state::AppState;
use flavorforge::config::AppConfig;
use flavorforge::routes;
use flavorforge::services::gemini::GeminiClient;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Configuration problems are fatal before anything else is wired up.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration, refusing to start");
            std::process::exit(1);
        }
    };

    tracing::info!("Initializing FlavorForge backend");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "recipe_requests_total",
        "Total recipe generation requests received"
    );
    metrics::describe_counter!(
        "recipe_requests_failed",
        "Recipe generation requests that ended in an error response"
    );
    metrics::describe_histogram!(
        "recipe_generation_seconds",
        "Time to produce a full three-recipe response"
    );
    metrics::describe_counter!(
        "recipe_images_total",
        "Recipe images produced, labelled by source"
    );

    let gemini = GeminiClient::new(config.gemini_api_key);
    let state = AppState::new(gemini);

    let app = routes::router(state, prometheus_handle);

    tracing::info!("Starting FlavorForge backend on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!(
        health = %format!("http://{}/api/health", config.bind_addr),
        recipes = %format!("http://{}/api/generate-recipes", config.bind_addr),
        "Server listening"
    );

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

use axum::Router;
use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Builds the full application: item and health routes, docs and middleware.
fn build_router(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);
    create_router::<openapi::ApiDoc>(api_routes, &state.config.server, &state.config.cors)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let router = build_router(&state)?;

    let base = format!("http://localhost:{}", state.config.server.port);
    info!(
        "{} v{} listening on port {}",
        state.config.app.display_name, state.config.app.version, state.config.server.port
    );
    info!("Health check: {base}/health");
    info!("Items API:    {base}/items");
    info!("API docs:     {base}/scalar");

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("{} shutdown complete", state.config.app.display_name);
    Ok(())
}

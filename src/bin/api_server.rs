// src/bin/api_server.rs

use baseroot_desci_api::infra::{config, telemetry};
use baseroot_desci_api::{simulated_state, transport};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init();

    let bind_addr = config::bind_addr()?;
    let api_prefix = config::api_prefix();
    let discovery_seed = config::discovery_rng_seed()?;

    // --- Store Initialization ---
    info!("Initializing in-memory stores (simulated chain, content store and index)...");
    match discovery_seed {
        Some(seed) => info!(seed, "Literature discovery uses a seeded random source"),
        None => info!("Literature discovery uses an OS-seeded random source"),
    }
    let app_state = simulated_state(discovery_seed);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state, &api_prefix)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("API server listening on http://{}", bind_addr);
    info!("Route groups mounted under '{}'", if api_prefix.is_empty() { "/" } else { api_prefix.as_str() });
    info!("Swagger UI available at http://{}/docs", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            // all state is in memory; nothing to flush
            info!("Shutdown signal received, exiting.");
        }
    }

    Ok(())
}

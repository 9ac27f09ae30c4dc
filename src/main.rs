//! Share Management Backend Server
//!
//! REST API server for managing share records.

use share_management_backend::api::{cors_layer, create_router};
use share_management_backend::config::{Config, DEFAULT_CONFIG_PATH};
use share_management_backend::db::DatabasePool;
use share_management_backend::error::ErrorResponse;
use share_management_backend::models::{
    DeleteShareResponse, HealthResponse, Share, UpdateMarketPriceRequest,
};
use share_management_backend::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        share_management_backend::api::handlers::health_check,
        share_management_backend::api::handlers::add_share,
        share_management_backend::api::handlers::get_all_shares,
        share_management_backend::api::handlers::get_share_by_id,
        share_management_backend::api::handlers::update_share_market_price,
        share_management_backend::api::handlers::delete_share,
    ),
    components(
        schemas(
            HealthResponse,
            Share,
            UpdateMarketPriceRequest,
            DeleteShareResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Shares", description = "Share record management"),
    ),
    info(
        title = "Share Management API",
        version = "0.1.0",
        description = "REST API for managing share records",
        license(name = "MIT"),
        contact(name = "Joaquin Bejar", email = "jb@taunais.com")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load_with_env(&config_path)?;

    // Pick the storage backend
    let state = match config.database.url.as_deref() {
        Some(url) => {
            let db = DatabasePool::new(url, &config.database).await?;
            db.ensure_schema().await?;
            info!("Using PostgreSQL share store");
            AppState::with_database(db)
        }
        None => {
            warn!("No database configured, shares are kept in memory");
            AppState::in_memory()
        }
    };
    let state = Arc::new(state);

    let addr = config.bind_address();
    info!("Starting Share Management Backend on {}", addr);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);
    info!("CORS allowed origin: {}", config.cors.allowed_origin);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&config.cors)?)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! Route configuration.

use crate::api::handlers;
use crate::config::CorsConfig;
use crate::state::AppState;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{delete, get, post, put};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Shares
        .route("/api/share/addShare", post(handlers::add_share))
        .route("/api/share/getAllShares", get(handlers::get_all_shares))
        .route(
            "/api/share/getShareById/{share_id}",
            get(handlers::get_share_by_id),
        )
        .route(
            "/api/share/updateShareMarketPrice",
            put(handlers::update_share_market_price),
        )
        .route(
            "/api/share/deleteShare/{share_id}",
            delete(handlers::delete_share),
        )
        .with_state(state)
}

/// Builds the CORS layer allowing only the configured origin.
///
/// # Errors
/// Returns an error if the origin is not a valid header value.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&config.allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

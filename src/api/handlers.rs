//! API request handlers.

use crate::api::extract::{ApiJson, ApiPath};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{DeleteShareResponse, HealthResponse, Share, UpdateMarketPriceRequest};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;


// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Share Management
// ============================================================================

/// Create a share.
#[utoipa::path(
    post,
    path = "/api/share/addShare",
    request_body = Share,
    responses(
        (status = 201, description = "Share created", body = Share),
        (status = 409, description = "Share id already in use", body = ErrorResponse)
    ),
    tag = "Shares"
)]
pub async fn add_share(
    State(state): State<Arc<AppState>>,
    ApiJson(share): ApiJson<Share>,
) -> Result<(StatusCode, Json<Share>), ApiError> {
    let created = state.shares.save_share(share).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all shares.
#[utoipa::path(
    get,
    path = "/api/share/getAllShares",
    responses(
        (status = 200, description = "All stored shares", body = Vec<Share>)
    ),
    tag = "Shares"
)]
pub async fn get_all_shares(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Share>>, ApiError> {
    Ok(Json(state.shares.get_all_shares().await?))
}

/// Get a share by id.
#[utoipa::path(
    get,
    path = "/api/share/getShareById/{share_id}",
    params(
        ("share_id" = i32, Path, description = "Share id")
    ),
    responses(
        (status = 200, description = "Share found", body = Share),
        (status = 404, description = "Share not found", body = ErrorResponse)
    ),
    tag = "Shares"
)]
pub async fn get_share_by_id(
    State(state): State<Arc<AppState>>,
    ApiPath(share_id): ApiPath<i32>,
) -> Result<Json<Share>, ApiError> {
    Ok(Json(state.shares.get_share_by_id(share_id).await?))
}

/// Update the market price of a share.
#[utoipa::path(
    put,
    path = "/api/share/updateShareMarketPrice",
    request_body = UpdateMarketPriceRequest,
    responses(
        (status = 200, description = "Share updated", body = Share),
        (status = 404, description = "Share not found", body = ErrorResponse)
    ),
    tag = "Shares"
)]
pub async fn update_share_market_price(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<UpdateMarketPriceRequest>,
) -> Result<Json<Share>, ApiError> {
    let updated = state
        .shares
        .update_share_market_price_by_id(request.share_id, request.market_price)
        .await?;
    Ok(Json(updated))
}

/// Delete a share.
#[utoipa::path(
    delete,
    path = "/api/share/deleteShare/{share_id}",
    params(
        ("share_id" = i32, Path, description = "Share id")
    ),
    responses(
        (status = 200, description = "Share deleted", body = DeleteShareResponse),
        (status = 404, description = "Share not found", body = ErrorResponse)
    ),
    tag = "Shares"
)]
pub async fn delete_share(
    State(state): State<Arc<AppState>>,
    ApiPath(share_id): ApiPath<i32>,
) -> Result<Json<DeleteShareResponse>, ApiError> {
    state.shares.delete_share(share_id).await?;
    Ok(Json(DeleteShareResponse::for_share(share_id)))
}

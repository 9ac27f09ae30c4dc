//! Integration tests for the Share Management API.
//!
//! Set `API_BASE_URL` to run the suite against an already running server.
//! Without it, each test boots the router in-process on an ephemeral port,
//! backed by the in-memory store.

use chrono::NaiveDate;
use share_client::{ClientConfig, Share, ShareClient};
use share_management_backend::api::{cors_layer, create_router};
use share_management_backend::config::CorsConfig;
use share_management_backend::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Gets the external API base URL from the environment, if configured.
#[must_use]
pub fn external_api_url() -> Option<String> {
    std::env::var("API_BASE_URL").ok()
}

/// Starts the API on `127.0.0.1` with an in-memory store and returns its base URL.
///
/// The server runs on the current Tokio runtime until that runtime shuts down.
///
/// # Errors
/// Returns error if the listener cannot be bound.
pub async fn spawn_in_process_server() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = create_router(Arc::new(AppState::in_memory()))
        .layer(cors_layer(&CorsConfig::default())?);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{}", addr))
}

/// Resolves the base URL for a test: the external server if configured,
/// otherwise a freshly spawned in-process one.
///
/// # Errors
/// Returns error if the in-process server cannot start.
pub async fn api_url() -> anyhow::Result<String> {
    match external_api_url() {
        Some(url) => Ok(url),
        None => spawn_in_process_server().await,
    }
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if the server cannot start or the client cannot be built.
pub async fn create_test_client() -> anyhow::Result<ShareClient> {
    let client = ShareClient::new(ClientConfig {
        base_url: api_url().await?,
        timeout: Duration::from_secs(10),
    })?;
    Ok(client)
}

/// Generates a share id unlikely to clash with other test runs on a shared server.
#[must_use]
pub fn unique_share_id() -> i32 {
    use std::sync::atomic::{AtomicI32, Ordering};

    static COUNTER: AtomicI32 = AtomicI32::new(1);

    let base = (std::process::id() % 100_000) as i32 * 10_000;
    base + COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Builds a share with the given id and name.
#[must_use]
pub fn sample_share(share_id: i32, name: &str, market_price: i32) -> Share {
    Share {
        share_id,
        share_name: name.to_string(),
        market_price,
        issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
    }
}

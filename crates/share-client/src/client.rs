//! HTTP client for the share API.

use crate::error::Error;
use crate::types::*;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

#[cfg(test)]
mod tests;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Share Management API.
#[derive(Debug, Clone)]
pub struct ShareClient {
    client: Client,
    base_url: String,
}

impl ShareClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn share_url(&self, endpoint: &str) -> String {
        format!("{}/api/share/{}", self.base_url, endpoint)
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Shares
    // ========================================================================

    /// Creates a share.
    ///
    /// # Errors
    /// Returns [`Error::Conflict`] if the share id is already in use.
    pub async fn add_share(&self, share: &Share) -> Result<Share, Error> {
        let resp = self
            .client
            .post(self.share_url("addShare"))
            .json(share)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Lists all shares.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_all_shares(&self) -> Result<Vec<Share>, Error> {
        let resp = self.client.get(self.share_url("getAllShares")).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a share by id.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the share does not exist.
    pub async fn get_share_by_id(&self, share_id: i32) -> Result<Share, Error> {
        let url = self.share_url(&format!("getShareById/{}", share_id));
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Updates a share's market price.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the share does not exist.
    pub async fn update_share_market_price(
        &self,
        request: &UpdateMarketPriceRequest,
    ) -> Result<Share, Error> {
        let resp = self
            .client
            .put(self.share_url("updateShareMarketPrice"))
            .json(request)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Deletes a share.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the share does not exist.
    pub async fn delete_share(&self, share_id: i32) -> Result<DeleteShareResponse, Error> {
        let url = self.share_url(&format!("deleteShare/{}", share_id));
        let resp = self.client.delete(&url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json().await?);
        }

        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        match status {
            StatusCode::NOT_FOUND => Err(Error::NotFound(message)),
            StatusCode::CONFLICT => Err(Error::Conflict(message)),
            _ => Err(Error::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

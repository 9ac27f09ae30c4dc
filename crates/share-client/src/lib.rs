//! HTTP client library for the Share Management API.
//!
//! This crate provides a typed HTTP client for the share CRUD endpoints.
//!
//! # Example
//!
//! ```no_run
//! use share_client::{ShareClient, ClientConfig, UpdateMarketPriceRequest};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), share_client::Error> {
//!     let client = ShareClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let updated = client
//!         .update_share_market_price(&UpdateMarketPriceRequest {
//!             share_id: 1,
//!             market_price: 150,
//!         })
//!         .await?;
//!     println!("{} now trades at {}", updated.share_name, updated.market_price);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, ShareClient};
pub use error::Error;
pub use types::*;

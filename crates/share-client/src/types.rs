//! Request and response types for the share API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};


/// A share record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// Primary key; `0` asks the server to assign one.
    #[serde(default)]
    pub share_id: i32,
    /// Share name.
    pub share_name: String,
    /// Market price in whole currency units.
    pub market_price: i32,
    /// Issue date.
    pub issue_date: NaiveDate,
}

/// Request to change a share's market price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarketPriceRequest {
    /// Share id.
    pub share_id: i32,
    /// New market price.
    pub market_price: i32,
}

/// Response after deleting a share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteShareResponse {
    /// Confirmation message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code (e.g. `NO_SUCH_SHARE`).
    pub code: String,
}

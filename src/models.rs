//! Request and response models for the REST API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[cfg(test)]
mod tests;

/// Identifier value meaning "not yet assigned by the store".
pub const UNASSIGNED_SHARE_ID: i32 = 0;

/// A share record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// Primary key. Omitted or `0` on create lets the store assign one.
    #[serde(default)]
    pub share_id: i32,
    /// Display name of the share.
    pub share_name: String,
    /// Market price in whole currency units.
    pub market_price: i32,
    /// Issue date (YYYY-MM-DD).
    pub issue_date: NaiveDate,
}

impl Share {
    /// Creates a new share record.
    #[must_use]
    pub fn new(
        share_id: i32,
        share_name: impl Into<String>,
        market_price: i32,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            share_id,
            share_name: share_name.into(),
            market_price,
            issue_date,
        }
    }

    /// Returns true if the store has not assigned an id yet.
    #[must_use]
    pub fn has_unassigned_id(&self) -> bool {
        self.share_id == UNASSIGNED_SHARE_ID
    }
}

/// Request to change the market price of a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarketPriceRequest {
    /// Id of the share to update.
    pub share_id: i32,
    /// New market price.
    pub market_price: i32,
}

/// Response after deleting a share.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteShareResponse {
    /// Confirmation message.
    pub message: String,
}

impl DeleteShareResponse {
    /// Builds the confirmation for the given share id.
    #[must_use]
    pub fn for_share(share_id: i32) -> Self {
        Self {
            message: format!("Share with {} deleted successfully!", share_id),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

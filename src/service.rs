//! Share service: existence rules on top of the storage adapter.

use crate::models::Share;
use crate::repository::{ShareRepository, StorageError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};


/// Service error types.
#[derive(Debug, Error)]
pub enum ShareError {
    /// No share is stored under the requested id.
    #[error("No share exists with id {0}")]
    NoSuchShare(i32),

    /// A share with the supplied id is already stored.
    #[error("Share with id {0} already exists")]
    ShareAlreadyExists(i32),

    /// The storage adapter failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Share management operations.
#[async_trait]
pub trait ShareService: Send + Sync {
    /// Returns all stored shares.
    async fn get_all_shares(&self) -> Result<Vec<Share>, ShareError>;

    /// Returns the share with the given id.
    ///
    /// # Errors
    /// [`ShareError::NoSuchShare`] if the id is unknown.
    async fn get_share_by_id(&self, share_id: i32) -> Result<Share, ShareError>;

    /// Stores a new share.
    ///
    /// The duplicate check is keyed on the id carried by `share` itself,
    /// including the unassigned value `0`.
    ///
    /// # Errors
    /// [`ShareError::ShareAlreadyExists`] if that id is already stored.
    async fn save_share(&self, share: Share) -> Result<Share, ShareError>;

    /// Deletes the share with the given id.
    ///
    /// # Errors
    /// [`ShareError::NoSuchShare`] if the id is unknown.
    async fn delete_share(&self, share_id: i32) -> Result<bool, ShareError>;

    /// Replaces the market price of a stored share, leaving other fields as they are.
    ///
    /// # Errors
    /// [`ShareError::NoSuchShare`] if the id is unknown.
    async fn update_share_market_price_by_id(
        &self,
        share_id: i32,
        market_price: i32,
    ) -> Result<Share, ShareError>;
}

/// Default [`ShareService`] over any [`ShareRepository`].
///
/// Each operation is a plain read-then-write against the repository. Two
/// concurrent creates with the same id can both pass the existence check.
pub struct ShareServiceImpl {
    repo: Arc<dyn ShareRepository>,
}

impl ShareServiceImpl {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn ShareRepository>) -> Self {
        Self { repo }
    }

    async fn require(&self, share_id: i32) -> Result<Share, ShareError> {
        match self.repo.find_by_id(share_id).await? {
            Some(share) => Ok(share),
            None => {
                warn!(share_id, "share not found");
                Err(ShareError::NoSuchShare(share_id))
            }
        }
    }
}

#[async_trait]
impl ShareService for ShareServiceImpl {
    async fn get_all_shares(&self) -> Result<Vec<Share>, ShareError> {
        let shares = self.repo.find_all().await?;
        debug!(count = shares.len(), "listed shares");
        Ok(shares)
    }

    async fn get_share_by_id(&self, share_id: i32) -> Result<Share, ShareError> {
        let share = self.require(share_id).await?;
        debug!(share_id, "fetched share");
        Ok(share)
    }

    async fn save_share(&self, share: Share) -> Result<Share, ShareError> {
        if self.repo.find_by_id(share.share_id).await?.is_some() {
            warn!(share_id = share.share_id, "rejecting duplicate share id");
            return Err(ShareError::ShareAlreadyExists(share.share_id));
        }

        let saved = self.repo.save(share).await?;
        info!(share_id = saved.share_id, name = %saved.share_name, "created share");
        Ok(saved)
    }

    async fn delete_share(&self, share_id: i32) -> Result<bool, ShareError> {
        self.require(share_id).await?;
        self.repo.delete_by_id(share_id).await?;
        info!(share_id, "deleted share");
        Ok(true)
    }

    async fn update_share_market_price_by_id(
        &self,
        share_id: i32,
        market_price: i32,
    ) -> Result<Share, ShareError> {
        let mut share = self.require(share_id).await?;
        let previous = share.market_price;
        share.market_price = market_price;

        let updated = self.repo.save(share).await?;
        info!(share_id, previous, market_price, "updated share market price");
        Ok(updated)
    }
}

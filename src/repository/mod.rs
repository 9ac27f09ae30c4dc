//! Storage adapter for share records.
//!
//! [`ShareRepository`] is the narrow data-access boundary the service layer
//! depends on. It performs no validation: duplicate and missing-key policy
//! belongs to the caller.

#[cfg(test)]
mod contract;
mod memory;
mod postgres;

pub use memory::InMemoryShareRepository;
pub use postgres::PgShareRepository;

use crate::models::Share;
use async_trait::async_trait;
use thiserror::Error;

/// Storage error types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database rejected or failed a query.
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),

    /// The identity generator cannot produce another id.
    #[error("share id space exhausted")]
    IdExhausted,
}

/// Persistence operations for shares, keyed by `share_id`.
#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Returns every stored share, ordered by id.
    async fn find_all(&self) -> Result<Vec<Share>, StorageError>;

    /// Looks up a share by id. Returns `None` if it does not exist.
    async fn find_by_id(&self, share_id: i32) -> Result<Option<Share>, StorageError>;

    /// Inserts or overwrites a share.
    ///
    /// A share carrying the unassigned id (`0`) receives a fresh id from the
    /// store. Any other id is used as given.
    async fn save(&self, share: Share) -> Result<Share, StorageError>;

    /// Removes the share with the given id. Missing ids are ignored.
    async fn delete_by_id(&self, share_id: i32) -> Result<(), StorageError>;
}

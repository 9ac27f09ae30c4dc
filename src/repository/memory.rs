//! In-memory share repository.

use super::{ShareRepository, StorageError};
use crate::models::Share;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i32, Share>,
    // Wider than the key so an explicit `i32::MAX` can still be stored.
    next_id: i64,
}

/// Share repository backed by an ordered map.
///
/// Mirrors identity-column behaviour: auto-assigned ids start at 1 and always
/// stay above every id stored so far.
#[derive(Debug)]
pub struct InMemoryShareRepository {
    table: RwLock<Table>,
}

impl InMemoryShareRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored shares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.read().rows.is_empty()
    }
}

impl Default for InMemoryShareRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShareRepository for InMemoryShareRepository {
    async fn find_all(&self) -> Result<Vec<Share>, StorageError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, share_id: i32) -> Result<Option<Share>, StorageError> {
        Ok(self.table.read().rows.get(&share_id).cloned())
    }

    async fn save(&self, mut share: Share) -> Result<Share, StorageError> {
        let mut table = self.table.write();

        if share.has_unassigned_id() {
            share.share_id =
                i32::try_from(table.next_id).map_err(|_| StorageError::IdExhausted)?;
            debug!(share_id = share.share_id, "assigned share id");
        }

        table.next_id = table.next_id.max(i64::from(share.share_id) + 1);

        table.rows.insert(share.share_id, share.clone());
        Ok(share)
    }

    async fn delete_by_id(&self, share_id: i32) -> Result<(), StorageError> {
        self.table.write().rows.remove(&share_id);
        Ok(())
    }
}

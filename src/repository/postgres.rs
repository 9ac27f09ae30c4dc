//! PostgreSQL share repository.

use super::{ShareRepository, StorageError};
use crate::db::{DatabasePool, ShareRow};
use crate::models::Share;
use async_trait::async_trait;
use tracing::debug;

const SELECT_ALL: &str = r#"
    SELECT share_id, share_name, market_price, issuedate
    FROM share
    ORDER BY share_id
"#;

const SELECT_BY_ID: &str = r#"
    SELECT share_id, share_name, market_price, issuedate
    FROM share
    WHERE share_id = $1
"#;

const INSERT_GENERATED: &str = r#"
    INSERT INTO share (share_name, market_price, issuedate)
    VALUES ($1, $2, $3)
    RETURNING share_id, share_name, market_price, issuedate
"#;

const UPSERT_EXPLICIT: &str = r#"
    INSERT INTO share (share_id, share_name, market_price, issuedate)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (share_id) DO UPDATE
    SET share_name = EXCLUDED.share_name,
        market_price = EXCLUDED.market_price,
        issuedate = EXCLUDED.issuedate
    RETURNING share_id, share_name, market_price, issuedate
"#;

// Moves the serial sequence forward past an explicitly supplied id. Never
// rewinds it, so deleted ids are not handed out again.
const ADVANCE_SEQUENCE: &str = r#"
    SELECT setval('share_share_id_seq', $1, true)
    FROM share_share_id_seq
    WHERE $1 > last_value OR ($1 = last_value AND NOT is_called)
"#;

const DELETE_BY_ID: &str = "DELETE FROM share WHERE share_id = $1";

/// Share repository backed by the `share` table.
#[derive(Clone)]
pub struct PgShareRepository {
    db: DatabasePool,
}

impl PgShareRepository {
    /// Creates a repository over an established pool.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShareRepository for PgShareRepository {
    async fn find_all(&self) -> Result<Vec<Share>, StorageError> {
        let rows: Vec<ShareRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows.into_iter().map(Share::from).collect())
    }

    async fn find_by_id(&self, share_id: i32) -> Result<Option<Share>, StorageError> {
        let row: Option<ShareRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(share_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.map(Share::from))
    }

    async fn save(&self, share: Share) -> Result<Share, StorageError> {
        if share.has_unassigned_id() {
            let row: ShareRow = sqlx::query_as(INSERT_GENERATED)
                .bind(&share.share_name)
                .bind(share.market_price)
                .bind(share.issue_date)
                .fetch_one(self.db.pool())
                .await?;
            debug!(share_id = row.share_id, "inserted share with generated id");
            return Ok(row.into());
        }

        let row: ShareRow = sqlx::query_as(UPSERT_EXPLICIT)
            .bind(share.share_id)
            .bind(&share.share_name)
            .bind(share.market_price)
            .bind(share.issue_date)
            .fetch_one(self.db.pool())
            .await?;

        sqlx::query(ADVANCE_SEQUENCE)
            .bind(i64::from(row.share_id))
            .execute(self.db.pool())
            .await?;

        debug!(share_id = row.share_id, "upserted share");
        Ok(row.into())
    }

    async fn delete_by_id(&self, share_id: i32) -> Result<(), StorageError> {
        sqlx::query(DELETE_BY_ID)
            .bind(share_id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }
}

//! Database schema types and statements.

use crate::models::Share;
use chrono::NaiveDate;
use sqlx::FromRow;

/// DDL for the `share` table.
pub const CREATE_SHARE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS share (
    share_id     SERIAL PRIMARY KEY,
    share_name   TEXT    NOT NULL,
    market_price INTEGER NOT NULL,
    issuedate    DATE    NOT NULL
)
"#;

/// Share record as stored in the `share` table.
#[derive(Debug, Clone, FromRow)]
pub struct ShareRow {
    /// Primary key.
    pub share_id: i32,
    /// Share name.
    pub share_name: String,
    /// Market price in whole currency units.
    pub market_price: i32,
    /// Issue date.
    #[sqlx(rename = "issuedate")]
    pub issue_date: NaiveDate,
}

impl From<ShareRow> for Share {
    fn from(row: ShareRow) -> Self {
        Share {
            share_id: row.share_id,
            share_name: row.share_name,
            market_price: row.market_price,
            issue_date: row.issue_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_row_into_share() {
        let row = ShareRow {
            share_id: 3,
            share_name: "ACME".to_string(),
            market_price: 120,
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        let share: Share = row.into();
        assert_eq!(
            share,
            Share::new(3, "ACME", 120, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_create_share_table_columns() {
        for column in ["share_id", "share_name", "market_price", "issuedate"] {
            assert!(CREATE_SHARE_TABLE.contains(column), "missing column {column}");
        }
        assert!(CREATE_SHARE_TABLE.contains("IF NOT EXISTS"));
    }
}

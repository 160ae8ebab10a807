//! Entry write operations: upsert, delete, and per-list cleanup.

use anyhow::Result;

use super::super::db::{unix_timestamp, StateDb};
use crate::key::StateKey;

impl StateDb {
    /// Insert or overwrite the value for a key.
    pub async fn set(&self, key: &StateKey, value: &str) -> Result<()> {
        let now = unix_timestamp();
        sqlx::query(
            r#"
            INSERT INTO entries (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE
            SET value = ?2,
                updated_at = ?3
            "#,
        )
        .bind(key.to_storage_key())
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete a single entry. Deleting an absent key is not an error.
    pub async fn remove(&self, key: &StateKey) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM entries
            WHERE key = ?1
            "#,
        )
        .bind(key.to_storage_key())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete every entry belonging to one list (items, labels, counters).
    /// Keys are matched by parsing, not by string prefix, so other lists
    /// are never touched. Returns the number of entries removed.
    pub async fn remove_list(&self, name: &str) -> Result<u64> {
        let mut removed = 0u64;
        for raw in self.all_keys().await? {
            let belongs = StateKey::from_storage_key(&raw)
                .map(|k| k.list() == name)
                .unwrap_or(false);
            if !belongs {
                continue;
            }
            let r = sqlx::query(
                r#"
                DELETE FROM entries
                WHERE key = ?1
                "#,
            )
            .bind(&raw)
            .execute(&self.pool)
            .await?;
            removed += r.rows_affected();
        }
        Ok(removed)
    }

    /// Delete item and label entries of a list with index > `len`.
    /// Called after a save that shrank the list so no stale checked state
    /// survives and gets resurrected by a later load.
    pub async fn remove_items_beyond(&self, name: &str, len: u32) -> Result<u64> {
        let mut removed = 0u64;
        for raw in self.all_keys().await? {
            let stale = match StateKey::from_storage_key(&raw) {
                Some(StateKey::Item { list, index }) | Some(StateKey::Label { list, index }) => {
                    list == name && index > len
                }
                _ => false,
            };
            if !stale {
                continue;
            }
            let r = sqlx::query(
                r#"
                DELETE FROM entries
                WHERE key = ?1
                "#,
            )
            .bind(&raw)
            .execute(&self.pool)
            .await?;
            removed += r.rows_affected();
        }
        Ok(removed)
    }
}

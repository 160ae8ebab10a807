//! Entry read operations: raw get, typed helpers, and key enumeration.

use anyhow::Result;
use sqlx::Row;

use super::super::db::StateDb;
use crate::error::StateError;
use crate::key::StateKey;

impl StateDb {
    /// Fetch the raw stored value for a key, or None if absent.
    pub async fn get(&self, key: &StateKey) -> Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT value FROM entries
            WHERE key = ?1
            "#,
        )
        .bind(key.to_storage_key())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.get("value")))
    }

    /// Parse a stored boolean ("true"/"false"). Absent or unparsable values
    /// yield None so a missing entry degrades to unchecked instead of
    /// failing the whole load.
    pub async fn get_bool(&self, key: &StateKey) -> Result<Option<bool>> {
        let value = self.get(key).await?;
        Ok(match value.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(other) => {
                tracing::warn!(
                    key = %key.to_storage_key(),
                    value = other,
                    "ignoring unparsable stored boolean"
                );
                None
            }
            None => None,
        })
    }

    /// Parse a stored counter. Absent is None; a non-numeric value is a
    /// corrupt store and surfaces as an error.
    pub async fn get_count(&self, key: &StateKey) -> Result<Option<u32>> {
        let Some(value) = self.get(key).await? else {
            return Ok(None);
        };
        let n: u32 = value.parse().map_err(|_| StateError::CorruptValue {
            key: key.to_storage_key(),
            value: value.clone(),
        })?;
        Ok(Some(n))
    }

    /// All stored keys, in key order. Small store; callers filter by parsing.
    pub async fn all_keys(&self) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT key FROM entries
            ORDER BY key ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.get("key")).collect())
    }

    /// Names of every stored checklist, sorted. A list exists iff its total
    /// count entry does (the analog of scanning progress-indicator elements).
    pub async fn list_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .all_keys()
            .await?
            .iter()
            .filter_map(|k| match StateKey::from_storage_key(k) {
                Some(StateKey::TotalCount { list }) => Some(list),
                _ => None,
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

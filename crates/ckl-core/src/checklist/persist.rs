//! Save/load a checklist through the state store.
//!
//! Save walks items 1..=N writing each stringified checked state while
//! accumulating the checked count, then writes the two counters. Load is
//! the inverse: total count first, then per-item state, with absent
//! entries degrading to unchecked.

use anyhow::Result;

use super::{Checklist, ChecklistItem};
use crate::key::StateKey;
use crate::state_db::StateDb;

impl Checklist {
    /// Persist the full list state: every item, every label, both counters.
    /// Item entries past the current length are dropped so a shrink leaves
    /// no stale checked state behind.
    pub async fn save(&self, db: &StateDb) -> Result<()> {
        let mut checked = 0u32;
        for (slot, item) in self.items.iter().enumerate() {
            let index = slot as u32 + 1;
            let value = if item.checked { "true" } else { "false" };
            db.set(&StateKey::item(&self.name, index), value).await?;
            db.set(&StateKey::label(&self.name, index), &item.label)
                .await?;
            if item.checked {
                checked += 1;
            }
        }
        db.set(&StateKey::checked_count(&self.name), &checked.to_string())
            .await?;
        db.set(&StateKey::total_count(&self.name), &self.len().to_string())
            .await?;
        db.remove_items_beyond(&self.name, self.len()).await?;

        tracing::debug!(
            list = %self.name,
            checked,
            total = self.len(),
            "saved checklist state"
        );
        Ok(())
    }

    /// Restore a checklist from stored state. `Ok(None)` when the list has
    /// no stored total count (never saved, or removed).
    pub async fn load(db: &StateDb, name: &str) -> Result<Option<Checklist>> {
        let Some(total) = db.get_count(&StateKey::total_count(name)).await? else {
            return Ok(None);
        };

        let mut items = Vec::with_capacity(total as usize);
        for index in 1..=total {
            let checked = db
                .get_bool(&StateKey::item(name, index))
                .await?
                .unwrap_or(false);
            let label = db
                .get(&StateKey::label(name, index))
                .await?
                .unwrap_or_default();
            items.push(ChecklistItem { label, checked });
        }

        Ok(Some(Checklist {
            name: name.to_string(),
            items,
        }))
    }
}

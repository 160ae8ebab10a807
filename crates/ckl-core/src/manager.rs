//! Checklist state manager: the change -> save -> notify pipeline.
//!
//! Owns the state store, the config, and the change hub. Every mutating
//! operation persists the full list state and then notifies subscribers,
//! mirroring the original's change-event -> save -> progress-render flow.

use anyhow::Result;

use crate::checklist::Checklist;
use crate::config::CklConfig;
use crate::error::StateError;
use crate::hub::{ChangeEvent, ChangeHub};
use crate::progress::ProgressSnapshot;
use crate::state_db::StateDb;

pub struct StateManager {
    db: StateDb,
    cfg: CklConfig,
    hub: ChangeHub,
}

impl StateManager {
    /// Open the store named by the config (or the XDG default location).
    pub async fn open(cfg: CklConfig) -> Result<Self> {
        let db = match &cfg.state_db_path {
            Some(path) => StateDb::open_at(path).await?,
            None => StateDb::open_default().await?,
        };
        Ok(Self::with_db(db, cfg))
    }

    /// Wrap an already-open store (tests, embedding).
    pub fn with_db(db: StateDb, cfg: CklConfig) -> Self {
        StateManager {
            db,
            cfg,
            hub: ChangeHub::new(),
        }
    }

    pub fn config(&self) -> &CklConfig {
        &self.cfg
    }

    pub fn hub(&self) -> &ChangeHub {
        &self.hub
    }

    /// Create and persist a new checklist. Refuses to clobber stored state
    /// of an existing list with the same name.
    pub async fn create(&self, name: &str, labels: Vec<String>) -> Result<Checklist> {
        if Checklist::load(&self.db, name).await?.is_some() {
            return Err(StateError::ListExists {
                list: name.to_string(),
            }
            .into());
        }
        let list = Checklist::new(name, labels);
        self.save_and_notify(&list).await?;
        tracing::info!(list = name, items = list.len(), "created checklist");
        Ok(list)
    }

    /// Load a checklist, erroring when it has no stored state.
    pub async fn load(&self, name: &str) -> Result<Checklist> {
        Checklist::load(&self.db, name).await?.ok_or_else(|| {
            StateError::ListNotFound {
                list: name.to_string(),
            }
            .into()
        })
    }

    /// The change event: set one item's checked state, save, notify.
    pub async fn set_checked(&self, list: &mut Checklist, index: u32, checked: bool) -> Result<()> {
        list.set_checked(index, checked)?;
        self.save_and_notify(list).await
    }

    /// Append an item; the save records the grown total.
    pub async fn add_item(&self, list: &mut Checklist, label: &str) -> Result<()> {
        list.push_item(label);
        self.save_and_notify(list).await
    }

    /// Remove an item; the save records the shrunk total and clears the
    /// now-stale tail entries.
    pub async fn remove_item(&self, list: &mut Checklist, index: u32) -> Result<()> {
        list.remove_item(index)?;
        self.save_and_notify(list).await
    }

    /// Progress counters for one list (0/0 when it was never saved).
    pub async fn progress(&self, name: &str) -> Result<ProgressSnapshot> {
        ProgressSnapshot::read(&self.db, name).await
    }

    /// Progress for every stored list, sorted by name.
    pub async fn status(&self) -> Result<Vec<(String, ProgressSnapshot)>> {
        let mut out = Vec::new();
        for name in self.db.list_names().await? {
            let snapshot = ProgressSnapshot::read(&self.db, &name).await?;
            out.push((name, snapshot));
        }
        Ok(out)
    }

    /// Delete every stored entry of one list. Returns the entry count removed.
    pub async fn remove(&self, name: &str) -> Result<u64> {
        let removed = self.db.remove_list(name).await?;
        if removed == 0 {
            return Err(StateError::ListNotFound {
                list: name.to_string(),
            }
            .into());
        }
        tracing::info!(list = name, entries = removed, "removed checklist");
        Ok(removed)
    }

    async fn save_and_notify(&self, list: &Checklist) -> Result<()> {
        list.save(&self.db).await?;
        self.hub.notify(&ChangeEvent {
            list: list.name().to_string(),
            checked: list.checked_count(),
            total: list.len(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_db::db::open_memory;
    use std::sync::{Arc, Mutex};

    async fn manager() -> StateManager {
        let db = open_memory().await.unwrap();
        StateManager::with_db(db, CklConfig::default())
    }

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("task {i}")).collect()
    }

    #[tokio::test]
    async fn create_then_load() {
        let mgr = manager().await;
        let created = mgr.create("Todo", labels(3)).await.unwrap();
        let loaded = mgr.load("Todo").await.unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn create_refuses_existing_name() {
        let mgr = manager().await;
        mgr.create("Todo", labels(2)).await.unwrap();
        let err = mgr.create("Todo", labels(5)).await.unwrap_err();
        assert_eq!(
            err.downcast::<StateError>().unwrap(),
            StateError::ListExists {
                list: "Todo".to_string()
            }
        );
    }

    #[tokio::test]
    async fn load_unknown_list_errors() {
        let mgr = manager().await;
        let err = mgr.load("Nowhere").await.unwrap_err();
        assert_eq!(
            err.downcast::<StateError>().unwrap(),
            StateError::ListNotFound {
                list: "Nowhere".to_string()
            }
        );
    }

    #[tokio::test]
    async fn set_checked_saves_and_notifies() {
        let mgr = manager().await;
        let mut list = mgr.create("Todo", labels(4)).await.unwrap();

        let events = Arc::new(Mutex::new(Vec::new()));
        let events2 = Arc::clone(&events);
        mgr.hub().attach(move |ev: &ChangeEvent| {
            events2.lock().unwrap().push(ev.clone());
        });

        mgr.set_checked(&mut list, 2, true).await.unwrap();
        mgr.set_checked(&mut list, 3, true).await.unwrap();

        // Counters are persisted, not just in-memory.
        let p = mgr.progress("Todo").await.unwrap();
        assert_eq!(p.checked, 2);
        assert_eq!(p.total, 4);

        let got = events.lock().unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(
            got[1],
            ChangeEvent {
                list: "Todo".to_string(),
                checked: 2,
                total: 4,
            }
        );
    }

    #[tokio::test]
    async fn out_of_range_change_does_not_notify() {
        let mgr = manager().await;
        let mut list = mgr.create("Todo", labels(2)).await.unwrap();

        let count = Arc::new(Mutex::new(0usize));
        let count2 = Arc::clone(&count);
        mgr.hub().attach(move |_: &ChangeEvent| {
            *count2.lock().unwrap() += 1;
        });

        assert!(mgr.set_checked(&mut list, 9, true).await.is_err());
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn add_and_remove_item_update_total() {
        let mgr = manager().await;
        let mut list = mgr.create("Todo", labels(2)).await.unwrap();

        mgr.add_item(&mut list, "a new task").await.unwrap();
        assert_eq!(mgr.progress("Todo").await.unwrap().total, 3);

        mgr.remove_item(&mut list, 1).await.unwrap();
        assert_eq!(mgr.progress("Todo").await.unwrap().total, 2);

        let loaded = mgr.load("Todo").await.unwrap();
        assert_eq!(loaded.items()[1].label, "a new task");
    }

    #[tokio::test]
    async fn status_covers_all_lists() {
        let mgr = manager().await;
        let mut a = mgr.create("A", labels(4)).await.unwrap();
        mgr.create("B", labels(1)).await.unwrap();
        mgr.set_checked(&mut a, 1, true).await.unwrap();
        mgr.set_checked(&mut a, 2, true).await.unwrap();
        mgr.set_checked(&mut a, 3, true).await.unwrap();

        let status = mgr.status().await.unwrap();
        assert_eq!(status.len(), 2);
        assert_eq!(status[0].0, "A");
        assert_eq!(status[0].1.percentage(), 75);
        assert_eq!(status[1].0, "B");
        assert_eq!(status[1].1.percentage(), 0);
    }

    #[tokio::test]
    async fn remove_deletes_list_state() {
        let mgr = manager().await;
        mgr.create("Todo", labels(3)).await.unwrap();
        mgr.create("Keep", labels(1)).await.unwrap();

        let removed = mgr.remove("Todo").await.unwrap();
        // 3 items + 3 labels + 2 counters.
        assert_eq!(removed, 8);
        assert!(mgr.load("Todo").await.is_err());
        assert!(mgr.load("Keep").await.is_ok());

        // Removing again reports not-found.
        assert!(mgr.remove("Todo").await.is_err());
    }
}

//! `ckl add <name> <label>` – append an item to a checklist.

use anyhow::Result;
use ckl_core::manager::StateManager;

pub async fn run_add(mgr: &StateManager, name: &str, label: &str) -> Result<()> {
    let mut list = mgr.load(name).await?;
    mgr.add_item(&mut list, label).await?;
    println!("Added item {} to '{name}': {label}", list.len());
    Ok(())
}

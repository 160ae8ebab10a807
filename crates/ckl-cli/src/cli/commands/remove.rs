//! `ckl remove <name>` – delete a checklist and all its stored entries.

use anyhow::Result;
use ckl_core::manager::StateManager;

pub async fn run_remove(mgr: &StateManager, name: &str) -> Result<()> {
    let removed = mgr.remove(name).await?;
    println!("Removed checklist '{name}' ({removed} stored entries)");
    Ok(())
}

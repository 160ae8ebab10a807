//! `ckl new <name> [labels...]` – create a checklist.

use anyhow::Result;
use ckl_core::manager::StateManager;

pub async fn run_new(mgr: &StateManager, name: &str, labels: Vec<String>) -> Result<()> {
    let list = mgr.create(name, labels).await?;
    println!("Created checklist '{name}' with {} item(s)", list.len());
    Ok(())
}

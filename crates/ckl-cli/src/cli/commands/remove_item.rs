//! `ckl remove-item <name> <index>` – delete one item; later items shift down.

use anyhow::Result;
use ckl_core::manager::StateManager;

pub async fn run_remove_item(mgr: &StateManager, name: &str, index: u32) -> Result<()> {
    let mut list = mgr.load(name).await?;
    mgr.remove_item(&mut list, index).await?;
    println!(
        "Removed item {index} from '{name}' ({} item(s) remain)",
        list.len()
    );
    Ok(())
}

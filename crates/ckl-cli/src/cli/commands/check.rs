//! `ckl check` / `ckl uncheck` – the change event: flip one item and save.

use anyhow::Result;
use ckl_core::manager::StateManager;

pub async fn run_check(mgr: &StateManager, name: &str, index: u32, checked: bool) -> Result<()> {
    let mut list = mgr.load(name).await?;
    mgr.set_checked(&mut list, index, checked).await?;
    let label = &list.items()[index as usize - 1].label;
    let mark = if checked { "done" } else { "not done" };
    println!("Marked '{name}' item {index} ({label}) as {mark}");
    Ok(())
}

//! `ckl show <name>` – one checklist: items plus progress meter.

use anyhow::Result;
use ckl_core::manager::StateManager;

pub async fn run_show(mgr: &StateManager, name: &str) -> Result<()> {
    let list = mgr.load(name).await?;
    println!("{name}");
    for (slot, item) in list.items().iter().enumerate() {
        let mark = if item.checked { "x" } else { " " };
        println!("  [{mark}] {}. {}", slot + 1, item.label);
    }
    let progress = mgr.progress(name).await?;
    println!("  {}", progress.render(mgr.config().progress_bar_width));
    Ok(())
}

//! `ckl status` – progress of every stored checklist.

use anyhow::Result;
use ckl_core::manager::StateManager;

pub async fn run_status(mgr: &StateManager) -> Result<()> {
    let status = mgr.status().await?;
    if status.is_empty() {
        println!("No checklists stored.");
    } else {
        let width = mgr.config().progress_bar_width;
        println!("{:<20} {:>7} {:>7}  PROGRESS", "LIST", "DONE", "TOTAL");
        for (name, p) in status {
            println!("{:<20} {:>7} {:>7}  {}", name, p.checked, p.total, p.render(width));
        }
    }
    Ok(())
}

//! Progress record for one checklist (checked/total counters).
//!
//! Read from the two stored counters; rendering is a pure function of the
//! snapshot so repeated renders without an intervening save are identical.

use anyhow::Result;

use crate::key::StateKey;
use crate::state_db::StateDb;

/// Snapshot of checklist completion (CLI-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Number of checked items at the last save.
    pub checked: u32,
    /// Total number of items at the last save.
    pub total: u32,
}

impl ProgressSnapshot {
    /// Read both counters for a list. Absent counters read as 0, so a list
    /// that was never saved renders as "0%" instead of failing.
    pub async fn read(db: &StateDb, list: &str) -> Result<Self> {
        let checked = db
            .get_count(&StateKey::checked_count(list))
            .await?
            .unwrap_or(0);
        let total = db
            .get_count(&StateKey::total_count(list))
            .await?
            .unwrap_or(0);
        Ok(ProgressSnapshot { checked, total })
    }

    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.checked as f64 / self.total as f64).min(1.0)
    }

    /// Percentage rounded to the nearest integer; 0 when the total is 0
    /// (the division-by-zero guard of the original display).
    pub fn percentage(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    /// Text meter plus percentage label, e.g. `[###############-----] 75%`.
    /// `width` 0 renders the label alone.
    pub fn render(&self, width: usize) -> String {
        let label = format!("{}%", self.percentage());
        if width == 0 {
            return label;
        }
        let filled = (self.fraction() * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("[{}{}] {label}", "#".repeat(filled), "-".repeat(width - filled))
    }
}

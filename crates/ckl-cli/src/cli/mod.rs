//! CLI for the CKL checklist state manager.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ckl_core::config;
use ckl_core::manager::StateManager;

use commands::{
    run_add, run_check, run_new, run_remove, run_remove_item, run_show, run_status,
};

/// Top-level CLI for the CKL checklist state manager.
#[derive(Debug, Parser)]
#[command(name = "ckl")]
#[command(about = "CKL: persistent checklist state with progress tracking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create a new checklist.
    New {
        /// Checklist display name.
        name: String,
        /// Initial item labels (zero or more).
        labels: Vec<String>,
    },

    /// Append an item to an existing checklist.
    Add {
        /// Checklist display name.
        name: String,
        /// Item label.
        label: String,
    },

    /// Mark an item as done.
    Check {
        /// Checklist display name.
        name: String,
        /// Item index (1-based).
        index: u32,
    },

    /// Mark an item as not done.
    Uncheck {
        /// Checklist display name.
        name: String,
        /// Item index (1-based).
        index: u32,
    },

    /// Show one checklist: items and progress.
    Show {
        /// Checklist display name.
        name: String,
    },

    /// Show progress of all checklists.
    Status,

    /// Remove a checklist and all its stored state.
    Remove {
        /// Checklist display name.
        name: String,
    },

    /// Remove one item from a checklist (later items shift down).
    RemoveItem {
        /// Checklist display name.
        name: String,
        /// Item index (1-based).
        index: u32,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mgr = StateManager::open(cfg).await?;

        // Re-render the progress line after every saved change, the way the
        // original re-rendered its progress bars on each change event.
        let width = mgr.config().progress_bar_width;
        let sub = mgr.hub().attach(move |ev| {
            let p = ckl_core::progress::ProgressSnapshot {
                checked: ev.checked,
                total: ev.total,
            };
            println!("{}: {}", ev.list, p.render(width));
        });

        let result = match cli.command {
            CliCommand::New { name, labels } => run_new(&mgr, &name, labels).await,
            CliCommand::Add { name, label } => run_add(&mgr, &name, &label).await,
            CliCommand::Check { name, index } => run_check(&mgr, &name, index, true).await,
            CliCommand::Uncheck { name, index } => run_check(&mgr, &name, index, false).await,
            CliCommand::Show { name } => run_show(&mgr, &name).await,
            CliCommand::Status => run_status(&mgr).await,
            CliCommand::Remove { name } => run_remove(&mgr, &name).await,
            CliCommand::RemoveItem { name, index } => run_remove_item(&mgr, &name, index).await,
        };

        mgr.hub().detach(sub);
        result
    }
}

#[cfg(test)]
mod tests;

pub mod config;
pub mod logging;

pub mod checklist;
pub mod error;
pub mod hub;
pub mod key;
pub mod manager;
pub mod progress;
pub mod state_db;

//! CLI command handlers. Each command is in its own file for clarity.

mod add;
mod check;
mod new;
mod remove;
mod remove_item;
mod show;
mod status;

pub use add::run_add;
pub use check::run_check;
pub use new::run_new;
pub use remove::run_remove;
pub use remove_item::run_remove_item;
pub use show::run_show;
pub use status::run_status;

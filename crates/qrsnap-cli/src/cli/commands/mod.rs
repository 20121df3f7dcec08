//! CLI command handlers. Each command is in its own file.

mod classify;
mod drive;
mod providers;
mod replay_har;
mod resolve;

pub use classify::run_classify;
pub use drive::{drive_script, parse_step, run_drive, DriveStep};
pub use providers::run_providers;
pub use replay_har::run_replay_har;
pub use resolve::run_resolve;

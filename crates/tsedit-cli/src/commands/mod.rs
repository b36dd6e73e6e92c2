//! Command implementations for tsedit-cli

pub mod check;
pub mod dump;
pub mod events;
pub mod show;

pub use check::run_check;
pub use dump::run_dump;
pub use events::run_events;
pub use show::{run_sections, run_show};

//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod layout;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use layout::{build_report, execute_layout, resolve_config, validate_args};
pub use models::{CheckArgs, LayoutArgs};
pub use utils::{display_schema, display_version, execute_check, execute_seed};

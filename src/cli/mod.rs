//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the runners for
//! the interactive menu and the one-shot subcommands.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod menu_app;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_copy, run_show, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, StampArg};
pub use menu_app::run_menu;
pub use presenter::Presenter;

//! CLI argument parsing and command dispatch.
//!
//! - `args` - Command-line argument structures
//! - `handlers` - Command dispatch

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, ConvertCommand, InspectCommand, LogLevel, ReplayCommand};
pub use handlers::dispatch_command;

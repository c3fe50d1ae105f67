//! Chroma CLI library module.
//!
//! # Module Organization
//!
//! - `cli/` - CLI argument parsing and command dispatch
//! - `config` - Picker options lookup (`--config` or `./chroma.toml`)
//! - Command modules - Individual CLI commands (`*_cmd.rs`)

pub mod cli;
pub mod config;

pub mod convert_cmd;
pub mod inspect_cmd;
pub mod replay_cmd;

pub use convert_cmd::convert;
pub use inspect_cmd::InspectReport;
pub use replay_cmd::{ReplayOutcome, ReplayScript, replay};

//! Command dispatch.

use anyhow::Result;

use super::args::{Cli, Commands};
use crate::config;

/// Dispatch a CLI command to its handler.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let options = config::resolve_options(cli.config.as_deref())?;
    tracing::debug!(?options, "resolved picker options");

    match cli.command {
        Commands::Convert(convert_cli) => convert_cli.run(&options),
        Commands::Inspect(inspect_cli) => inspect_cli.run(),
        Commands::Replay(replay_cli) => replay_cli.run(&options),
    }
}

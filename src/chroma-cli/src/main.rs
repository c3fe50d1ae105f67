//! Chroma CLI - Main entry point.
//!
//! - `convert` - reformat a color string
//! - `inspect` - show a color as hsla, rgba and hex
//! - `replay` - drive a headless picker from a TOML event script

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use chroma_cli::cli::{Cli, dispatch_command};

fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_filter_str(), cli.json_logs);

    dispatch_command(cli)
}

//! Command-line argument definitions.

use std::path::PathBuf;

use chroma_framework::core::DisplayFormat;
use clap::{Args, Parser, Subcommand};

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including per-move value updates
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Chroma - color conversion and headless color picker sessions
#[derive(Debug, Parser)]
#[command(name = "chroma")]
#[command(author, version)]
#[command(about = "Chroma - HSLA color picker toolkit", long_about = None)]
pub struct Cli {
    /// Picker options file (TOML). Defaults to ./chroma.toml when present.
    #[arg(long = "config", short = 'c', global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set log verbosity level (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        short = 'L',
        value_enum,
        default_value = "warn",
        global = true,
        help_heading = "Debugging"
    )]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[arg(long = "json-logs", global = true, help_heading = "Debugging")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a color string to another format
    Convert(ConvertCommand),

    /// Show a color in every representation
    Inspect(InspectCommand),

    /// Drive a headless picker from a TOML event script
    Replay(ReplayCommand),
}

/// Arguments for `chroma convert`.
#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Color to convert, e.g. "#FF8800", "rgb(255, 136, 0)" or "hsl(32, 100%, 50%)"
    pub color: String,

    /// Output format (hsl, rgb, hex). Defaults to the configured display format.
    #[arg(long = "to", short = 't', value_name = "FORMAT")]
    pub to: Option<DisplayFormat>,
}

/// Arguments for `chroma inspect`.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Color to inspect
    pub color: String,

    /// Print a JSON object instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `chroma replay`.
#[derive(Debug, Args)]
pub struct ReplayCommand {
    /// Path to the replay script
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}

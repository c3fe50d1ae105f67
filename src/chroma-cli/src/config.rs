//! Picker options resolution for the CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chroma_framework::picker::PickerOptions;

/// Options file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "chroma.toml";

/// Resolves picker options relative to the current directory.
pub fn resolve_options(explicit: Option<&Path>) -> Result<PickerOptions> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    resolve_options_in(explicit, &cwd)
}

/// Resolves picker options.
///
/// An explicit path must exist. Without one, `chroma.toml` in `dir` is used
/// if present, otherwise the defaults.
pub fn resolve_options_in(explicit: Option<&Path>, dir: &Path) -> Result<PickerOptions> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = dir.join(DEFAULT_CONFIG_FILE);
            if !fallback.is_file() {
                return Ok(PickerOptions::default());
            }
            fallback
        }
    };

    tracing::debug!(path = %path.display(), "loading picker options");
    PickerOptions::load(&path)
        .with_context(|| format!("Failed to load options from {}", path.display()))
}

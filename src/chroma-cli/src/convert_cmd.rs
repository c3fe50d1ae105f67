//! `chroma convert`: reformat a color string.

use anyhow::{Context, Result};
use chroma_framework::core::{DisplayFormat, format_color, parse_color};
use chroma_framework::picker::PickerOptions;

use crate::cli::ConvertCommand;

impl ConvertCommand {
    /// Run the convert command.
    pub fn run(self, options: &PickerOptions) -> Result<()> {
        let output = convert(&self.color, self.to.unwrap_or(options.display))?;
        println!("{output}");
        Ok(())
    }
}

/// Parses `input` and formats it as `format`.
pub fn convert(input: &str, format: DisplayFormat) -> Result<String> {
    let parsed = parse_color(input).with_context(|| format!("Invalid color '{input}'"))?;
    Ok(format_color(&parsed.color, format))
}

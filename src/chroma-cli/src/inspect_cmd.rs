//! `chroma inspect`: show a color in every representation.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chroma_framework::core::{DisplayFormat, format_color, parse_color};
use serde::Serialize;

use crate::cli::InspectCommand;

/// Everything `inspect` reports about one color.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// The input as given.
    pub input: String,
    /// Format the input was recognized as.
    pub format: DisplayFormat,
    /// `hsla(...)` text.
    pub hsla: String,
    /// `rgba(...)` text.
    pub rgba: String,
    /// `#RRGGBB` text.
    pub hex: String,
    /// Components that were out of range and clamped.
    pub clamped: Vec<ClampedComponent>,
}

/// One clamped component.
#[derive(Debug, Serialize)]
pub struct ClampedComponent {
    pub component: String,
    pub requested: f64,
    pub applied: f64,
}

impl InspectReport {
    /// Builds the report for `input`.
    pub fn new(input: &str) -> Result<Self> {
        let parsed = parse_color(input).with_context(|| format!("Invalid color '{input}'"))?;
        let clamped = parsed
            .adjustments
            .iter()
            .map(|adjustment| ClampedComponent {
                component: adjustment.component.to_string(),
                requested: adjustment.requested,
                applied: adjustment.applied,
            })
            .collect();

        Ok(Self {
            input: input.to_string(),
            format: parsed.format,
            hsla: format_color(&parsed.color, DisplayFormat::Hsl),
            rgba: format_color(&parsed.color, DisplayFormat::Rgb),
            hex: format_color(&parsed.color, DisplayFormat::Hex),
            clamped,
        })
    }

    /// Renders the report as aligned text lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "format: {}", self.format);
        let _ = writeln!(out, "hsla:   {}", self.hsla);
        let _ = writeln!(out, "rgba:   {}", self.rgba);
        let _ = write!(out, "hex:    {}", self.hex);
        for clamp in &self.clamped {
            let _ = write!(
                out,
                "\nclamped {} from {} to {}",
                clamp.component, clamp.requested, clamp.applied
            );
        }
        out
    }
}

impl InspectCommand {
    /// Run the inspect command.
    pub fn run(self) -> Result<()> {
        let report = InspectReport::new(&self.color)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.to_text());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_report() {
        let report = InspectReport::new("rgba(0, 0, 255, 0.5)").unwrap();
        assert_eq!(
            report.to_text(),
            "format: rgb\n\
             hsla:   hsla(240, 100%, 50%, 0.5)\n\
             rgba:   rgba(0, 0, 255, 0.5)\n\
             hex:    #0000FF"
        );
    }

    #[test]
    fn test_clamped_components_are_listed() {
        let report = InspectReport::new("hsl(10, 120%, 50%)").unwrap();
        assert_eq!(report.clamped.len(), 1);
        assert!(report.to_text().ends_with("clamped saturation from 120 to 100"));
    }

    #[test]
    fn test_json_report() {
        let report = InspectReport::new("#FF0000").unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["format"], "hex");
        assert_eq!(value["hsla"], "hsla(0, 100%, 50%, 1)");
        assert_eq!(value["clamped"], serde_json::json!([]));
    }
}

//! Picker options.
//!
//! Options are plain data and can be loaded from TOML:
//!
//! ```toml
//! display = "rgb"
//! change_bound_value = true
//! set_value_on_close = false
//! change_hue = true
//! change_with_alpha = false
//! ```
//!
//! Every key is optional.

use std::path::Path;

use chroma_core::DisplayFormat;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Behavior switches for a [`ColorPicker`](crate::ColorPicker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOptions {
    /// Initial display format of the values field.
    #[serde(default)]
    pub display: DisplayFormat,

    /// Whether the picker writes its value into the bound field at all.
    #[serde(default = "default_true")]
    pub change_bound_value: bool,

    /// Write the bound field only when the picker closes, rather than on
    /// every change.
    #[serde(default = "default_true")]
    pub set_value_on_close: bool,

    /// Redraw the hue strip with the current saturation, lightness and alpha.
    #[serde(default = "default_true")]
    pub change_hue: bool,

    /// Fade the saturation/lightness square with the current alpha.
    #[serde(default = "default_true")]
    pub change_with_alpha: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            display: DisplayFormat::default(),
            change_bound_value: true,
            set_value_on_close: true,
            change_hue: true,
            change_with_alpha: true,
        }
    }
}

impl PickerOptions {
    /// Load options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content)?;
        Ok(options)
    }

    /// Returns whether each color change is written to the bound field
    /// immediately.
    pub fn syncs_bound_live(&self) -> bool {
        self.change_bound_value && !self.set_value_on_close
    }

    /// Returns whether closing the picker writes the bound field.
    pub fn syncs_bound_on_close(&self) -> bool {
        self.change_bound_value && self.set_value_on_close
    }
}

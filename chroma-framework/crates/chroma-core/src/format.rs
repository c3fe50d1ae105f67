//! Textual color representations.
//!
//! The picker shows its value in one of three formats and cycles between them
//! when the preview is clicked:
//!
//! | Format | Output                    |
//! |--------|---------------------------|
//! | `hsl`  | `hsla(H, S%, L%, A)`      |
//! | `rgb`  | `rgba(R, G, B, A)`        |
//! | `hex`  | `#RRGGBB`                 |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// The textual format used for the values field and the bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// `hsla(H, S%, L%, A)`.
    #[default]
    Hsl,
    /// `rgba(R, G, B, A)`.
    Rgb,
    /// `#RRGGBB`.
    Hex,
}

impl DisplayFormat {
    /// All formats in cycling order.
    pub const ALL: [DisplayFormat; 3] = [
        DisplayFormat::Hsl,
        DisplayFormat::Rgb,
        DisplayFormat::Hex,
    ];

    /// The next format in the cycle hsl → rgb → hex → hsl.
    pub const fn next(self) -> Self {
        match self {
            DisplayFormat::Hsl => DisplayFormat::Rgb,
            DisplayFormat::Rgb => DisplayFormat::Hex,
            DisplayFormat::Hex => DisplayFormat::Hsl,
        }
    }

    /// Lowercase name of the format.
    pub const fn as_str(self) -> &'static str {
        match self {
            DisplayFormat::Hsl => "hsl",
            DisplayFormat::Rgb => "rgb",
            DisplayFormat::Hex => "hex",
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a format name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown display format: {0} (expected hsl, rgb or hex)")]
pub struct UnknownFormat(pub String);

impl FromStr for DisplayFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsl" | "hsla" => Ok(DisplayFormat::Hsl),
            "rgb" | "rgba" => Ok(DisplayFormat::Rgb),
            "hex" => Ok(DisplayFormat::Hex),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Formats a color in the given display format.
///
/// # Examples
///
/// ```
/// use chroma_core::color::Color;
/// use chroma_core::format::{format_color, DisplayFormat};
///
/// let c = Color::new(0.0, 100.0, 50.0, 0.5);
/// assert_eq!(format_color(&c, DisplayFormat::Hsl), "hsla(0, 100%, 50%, 0.5)");
/// assert_eq!(format_color(&c, DisplayFormat::Rgb), "rgba(255, 0, 0, 0.5)");
/// assert_eq!(format_color(&c, DisplayFormat::Hex), "#FF0000");
/// ```
pub fn format_color(color: &Color, format: DisplayFormat) -> String {
    match format {
        DisplayFormat::Hsl => color.to_string(),
        DisplayFormat::Rgb => {
            let rgb = color.to_rgb();
            format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, color.alpha())
        }
        DisplayFormat::Hex => color.to_hex().into(),
    }
}

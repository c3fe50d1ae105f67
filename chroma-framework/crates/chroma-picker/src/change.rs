//! Change notifications.

use chroma_core::{Color, Hex, Rgb};
use serde::Serialize;

/// The picker's value in every representation, sent after each change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorChange {
    /// The color as HSLA.
    pub hsla: Color,
    /// The color as RGB, carrying the alpha.
    pub rgba: Rgb,
    /// The color as `#RRGGBB`.
    pub hex: Hex,
}

impl From<Color> for ColorChange {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgb();
        Self {
            hsla: color,
            hex: rgba.to_hex(),
            rgba,
        }
    }
}

/// Callback invoked with every [`ColorChange`].
pub type ChangeCallback = Box<dyn Fn(&ColorChange) + Send + Sync>;

//! The picker's controls, their layout, and pointer-to-value mapping.

use std::fmt;

use chroma_core::geometry::coordinate_to_value;
use chroma_core::{Color, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// One of the picker's interactive surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Swatch showing the current color. Clicking cycles the display format.
    Preview,
    /// Horizontal hue strip.
    Hue,
    /// Saturation (x) / lightness (y) square.
    SatLight,
    /// Horizontal alpha strip.
    Alpha,
}

impl ControlKind {
    /// All controls, in hit-test order.
    pub const ALL: [ControlKind; 4] = [
        ControlKind::Preview,
        ControlKind::Hue,
        ControlKind::SatLight,
        ControlKind::Alpha,
    ];

    /// Returns whether pressing and dragging on this control sets a value.
    pub const fn is_draggable(self) -> bool {
        !matches!(self, ControlKind::Preview)
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Preview => write!(f, "preview"),
            ControlKind::Hue => write!(f, "hue"),
            ControlKind::SatLight => write!(f, "sat_light"),
            ControlKind::Alpha => write!(f, "alpha"),
        }
    }
}

/// Offset of a control's handle from the control's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HandleOffset {
    /// Horizontal translation in pixels.
    pub x: f64,
    /// Vertical translation in pixels. Always zero for the strips.
    pub y: f64,
}

/// Page rectangles of every control, plus the size of the drag handles.
///
/// The default is a 180 pixel wide vertical stack at the page origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlLayout {
    /// Preview swatch.
    pub preview: Rect,
    /// Hue strip.
    pub hue: Rect,
    /// Saturation/lightness square.
    pub sat_light: Rect,
    /// Alpha strip.
    pub alpha: Rect,
    /// Size of each drag handle.
    #[serde(default)]
    pub handle: Size,
}

impl Default for ControlLayout {
    fn default() -> Self {
        Self::stacked(Point::ZERO, 180)
    }
}

impl ControlLayout {
    /// Lays the controls out top to bottom at `origin`: preview, hue strip,
    /// saturation/lightness square, alpha strip.
    pub fn stacked(origin: Point, width: u32) -> Self {
        const STRIP: u32 = 12;
        const GAP: i32 = 4;
        const SQUARE: u32 = 100;

        let preview = Rect::new(origin.x, origin.y, width, 20);
        let hue = Rect::new(origin.x, preview.bottom() + GAP, width, STRIP);
        let sat_light = Rect::new(origin.x, hue.bottom() + GAP, width, SQUARE);
        let alpha = Rect::new(origin.x, sat_light.bottom() + GAP, width, STRIP);

        Self {
            preview,
            hue,
            sat_light,
            alpha,
            handle: Size::new(8, 8),
        }
    }

    /// Returns the rectangle of a control.
    pub const fn rect(&self, kind: ControlKind) -> Rect {
        match kind {
            ControlKind::Preview => self.preview,
            ControlKind::Hue => self.hue,
            ControlKind::SatLight => self.sat_light,
            ControlKind::Alpha => self.alpha,
        }
    }

    /// Returns the control under `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<ControlKind> {
        ControlKind::ALL
            .into_iter()
            .find(|&kind| self.rect(kind).contains_point(point))
    }

    /// Sets the channel(s) a control edits from a pointer position.
    ///
    /// The pointer may be outside the control (a drag that left it); the
    /// mapped value is clamped into the channel's domain. Returns `false` for
    /// the preview, which edits nothing.
    pub fn apply_pointer(&self, kind: ControlKind, point: Point, color: &mut Color) -> bool {
        let rect = self.rect(kind);
        let sample = rect.sample(point);
        let width = f64::from(rect.width);
        let height = f64::from(rect.height);

        match kind {
            ControlKind::Preview => return false,
            ControlKind::Hue => {
                color.set_hue(coordinate_to_value(sample.x, width, 360.0));
            }
            ControlKind::Alpha => {
                color.set_alpha(coordinate_to_value(sample.x, width, 100.0) / 100.0);
            }
            ControlKind::SatLight => {
                color.set_saturation(coordinate_to_value(sample.x, width, 100.0));
                color.set_lightness(coordinate_to_value(sample.y, height, 100.0));
            }
        }
        true
    }

    /// Returns where a control's handle sits for `color`.
    ///
    /// The handle travels the full control width; its own width is
    /// subtracted proportionally so it stays inside the control at both ends.
    /// Returns `None` for the preview, which has no handle.
    pub fn handle_offset(&self, kind: ControlKind, color: &Color) -> Option<HandleOffset> {
        let rect = self.rect(kind);
        let width = f64::from(rect.width);
        let height = f64::from(rect.height);
        let handle_width = f64::from(self.handle.width);
        let handle_height = f64::from(self.handle.height);

        let percent = match kind {
            ControlKind::Preview => return None,
            ControlKind::Hue => f64::from(color.hue()) * 100.0 / 360.0,
            ControlKind::Alpha => f64::from(color.alpha()) * 100.0,
            ControlKind::SatLight => f64::from(color.saturation()),
        };
        let x = percent * width / 100.0 - percent / 100.0 * handle_width;

        let y = if kind == ControlKind::SatLight {
            let inverse = 100.0 - f64::from(color.lightness());
            inverse * height / 100.0 - inverse / 100.0 * handle_height
        } else {
            0.0
        };

        Some(HandleOffset { x, y })
    }
}

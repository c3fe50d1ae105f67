//! Renderer-agnostic descriptions of the picker's gradient surfaces.
//!
//! A renderer draws three surfaces:
//!
//! - the hue strip, a horizontal gradient through the color wheel
//! - the alpha strip, a horizontal gradient from transparent to opaque
//! - the saturation/lightness square, where x maps to saturation and y
//!   (measured upward) maps to lightness
//!
//! The strips are described as evenly spaced [`GradientStop`]s; the square is
//! sampled point by point with [`sat_light_color_at`].

use crate::color::Color;
use crate::geometry::{coordinate_to_value, PointerSample, Size};

/// Number of stops in each strip gradient.
pub const STOP_COUNT: usize = 7;

/// Hue distance between adjacent hue stops, in degrees.
const HUE_STEP: f64 = 360.0 / (STOP_COUNT - 1) as f64;

/// A color at a relative position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, from 0.0 (left) to 1.0 (right).
    pub offset: f64,
    /// Color at this position.
    pub color: Color,
}

impl GradientStop {
    /// Creates a new stop.
    #[inline]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

#[inline]
fn stop_offset(index: usize) -> f64 {
    index as f64 / (STOP_COUNT - 1) as f64
}

/// Stops of the hue strip.
///
/// With `follow_current` the strip uses the current saturation, lightness and
/// alpha, so it previews what each hue would look like. Otherwise it shows
/// fully saturated, opaque colors at half lightness.
pub fn hue_gradient(current: &Color, follow_current: bool) -> [GradientStop; STOP_COUNT] {
    std::array::from_fn(|i| {
        let hue = i as f64 * HUE_STEP;
        let color = if follow_current {
            Color::new(
                hue,
                f64::from(current.saturation()),
                f64::from(current.lightness()),
                f64::from(current.alpha()),
            )
        } else {
            Color::hsl(hue, 100.0, 50.0)
        };
        GradientStop::new(stop_offset(i), color)
    })
}

/// Stops of the alpha strip: the current color fading from transparent to
/// opaque.
pub fn alpha_gradient(current: &Color) -> [GradientStop; STOP_COUNT] {
    std::array::from_fn(|i| {
        let offset = stop_offset(i);
        GradientStop::new(offset, current.with_alpha(offset))
    })
}

/// Color of the saturation/lightness square at `sample` for the given hue.
///
/// `sample` is relative to the square as produced by
/// [`Rect::sample`](crate::geometry::Rect::sample). Points outside the square
/// are clamped to its edge colors.
pub fn sat_light_color_at(hue: u16, sample: PointerSample, size: Size) -> Color {
    let saturation = coordinate_to_value(sample.x, f64::from(size.width), 100.0);
    let lightness = coordinate_to_value(sample.y, f64::from(size.height), 100.0);
    Color::hsl(f64::from(hue), saturation, lightness)
}

/// Opacity of the saturation/lightness square.
///
/// When the square follows alpha it is drawn with the current alpha, otherwise
/// it is always opaque.
#[inline]
pub fn sat_light_opacity(current: &Color, follow_alpha: bool) -> f32 {
    if follow_alpha {
        current.alpha()
    } else {
        1.0
    }
}

//! HSLA color value and conversions to RGB and hex.
//!
//! This module provides the [`Color`] type the picker edits, together with the
//! conversions between its representations:
//!
//! - [`hsl_to_rgb`] / [`rgb_to_hsl`]: lossy in both directions because every
//!   channel is rounded to an integer
//! - [`rgb_to_hex`] / [`hex_to_rgb`]: exact
//! - [`clamp`]: channel normalization
//!
//! # Channel domains
//!
//! | Channel    | Type  | Domain     |
//! |------------|-------|------------|
//! | hue        | `u16` | 0 – 360    |
//! | saturation | `u8`  | 0 – 100    |
//! | lightness  | `u8`  | 0 – 100    |
//! | alpha      | `f32` | 0.0 – 1.0, hundredths |
//!
//! Every constructor and setter clamps, so a [`Color`] never holds an
//! out-of-range channel. Alpha is always rounded to two decimal places.
//!
//! # Examples
//!
//! ```
//! use chroma_core::color::{hsl_to_rgb, rgb_to_hex, Color};
//!
//! let rgb = hsl_to_rgb(120.0, 100.0, 50.0, None);
//! assert_eq!((rgb.r, rgb.g, rgb.b), (0, 255, 0));
//! assert_eq!(rgb_to_hex(255, 0, 0).as_str(), "#FF0000");
//!
//! let mut color = Color::default();
//! color.set_saturation(140.0);
//! assert_eq!(color.saturation(), 100);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ColorParseError, Result};
use crate::geometry::round_half_up;

/// Maximum hue in degrees.
pub const HUE_MAX: u16 = 360;

/// Maximum saturation in percent.
pub const SATURATION_MAX: u8 = 100;

/// Maximum lightness in percent.
pub const LIGHTNESS_MAX: u8 = 100;

/// Two consecutive hex digits.
static HEX_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9a-fA-F]{2}").expect("Invalid hex pair regex"));

// ============================================================================
// Normalization
// ============================================================================

/// Restricts a value to `[min, max]` by snapping to the nearest boundary.
///
/// Idempotent: `clamp(clamp(x, lo, hi), lo, hi) == clamp(x, lo, hi)`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps an alpha value into `[0, 1]` and rounds it to hundredths.
///
/// NaN maps to fully opaque.
#[inline]
pub fn round_alpha(alpha: f64) -> f32 {
    if alpha.is_nan() {
        return 1.0;
    }
    let hundredths = round_half_up(clamp(alpha, 0.0, 1.0) * 100.0);
    (hundredths / 100.0) as f32
}

/// Rounds and clamps an integer channel given as a real number.
#[inline]
fn integer_channel(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    clamp(round_half_up(value), 0.0, max)
}

// ============================================================================
// Channels
// ============================================================================

/// One component of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Hue in degrees.
    Hue,
    /// Saturation in percent.
    Saturation,
    /// Lightness in percent.
    Lightness,
    /// Opacity.
    Alpha,
}

impl Channel {
    /// All channels in positional order (h, s, l, a).
    pub const ALL: [Channel; 4] = [
        Channel::Hue,
        Channel::Saturation,
        Channel::Lightness,
        Channel::Alpha,
    ];

    /// Upper bound of the channel's domain. The lower bound is always zero.
    pub const fn max(self) -> f64 {
        match self {
            Channel::Hue => HUE_MAX as f64,
            Channel::Saturation => SATURATION_MAX as f64,
            Channel::Lightness => LIGHTNESS_MAX as f64,
            Channel::Alpha => 1.0,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Hue => write!(f, "hue"),
            Channel::Saturation => write!(f, "saturation"),
            Channel::Lightness => write!(f, "lightness"),
            Channel::Alpha => write!(f, "alpha"),
        }
    }
}

// ============================================================================
// Color
// ============================================================================

/// An HSLA color with every channel held inside its domain.
///
/// The picker owns one `Color` and mutates it only through the clamping
/// setters, so observers never see a partially updated or out-of-range value.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColorRepr")]
pub struct Color {
    hue: u16,
    saturation: u8,
    lightness: u8,
    alpha: f32,
}

/// Unvalidated channel values, clamped on the way into a [`Color`].
#[derive(Deserialize)]
struct ColorRepr {
    hue: f64,
    saturation: f64,
    lightness: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        Self::new(repr.hue, repr.saturation, repr.lightness, repr.alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color::hsla({}, {}, {}, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

impl Color {
    /// Fully saturated red at half lightness, opaque. The picker's initial value.
    pub const RED: Self = Self::from_parts(0, 100, 50, 1.0);

    /// Opaque black.
    pub const BLACK: Self = Self::from_parts(0, 0, 0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::from_parts(0, 0, 100, 1.0);

    const fn from_parts(hue: u16, saturation: u8, lightness: u8, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Creates a color, rounding and clamping every channel into its domain.
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: integer_channel(hue, HUE_MAX as f64) as u16,
            saturation: integer_channel(saturation, SATURATION_MAX as f64) as u8,
            lightness: integer_channel(lightness, LIGHTNESS_MAX as f64) as u8,
            alpha: round_alpha(alpha),
        }
    }

    /// Creates an opaque color.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::new(hue, saturation, lightness, 1.0)
    }

    /// Hue in degrees (0–360).
    #[inline]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Saturation in percent (0–100).
    #[inline]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Lightness in percent (0–100).
    #[inline]
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    /// Alpha (0.0–1.0, hundredths).
    #[inline]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Sets the hue, clamped to 0–360.
    pub fn set_hue(&mut self, hue: f64) {
        self.hue = integer_channel(hue, HUE_MAX as f64) as u16;
    }

    /// Sets the saturation, clamped to 0–100.
    pub fn set_saturation(&mut self, saturation: f64) {
        self.saturation = integer_channel(saturation, SATURATION_MAX as f64) as u8;
    }

    /// Sets the lightness, clamped to 0–100.
    pub fn set_lightness(&mut self, lightness: f64) {
        self.lightness = integer_channel(lightness, LIGHTNESS_MAX as f64) as u8;
    }

    /// Sets the alpha, clamped to 0–1 and rounded to hundredths.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = round_alpha(alpha);
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.set_alpha(alpha);
        self
    }

    /// Returns the value of one channel.
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Hue => f64::from(self.hue),
            Channel::Saturation => f64::from(self.saturation),
            Channel::Lightness => f64::from(self.lightness),
            Channel::Alpha => f64::from(self.alpha),
        }
    }

    /// Sets one channel, clamping it into its domain.
    ///
    /// Returns `true` when the value had to be clamped.
    pub fn set_channel(&mut self, channel: Channel, value: f64) -> bool {
        let clamped = value < 0.0 || value > channel.max();
        match channel {
            Channel::Hue => self.set_hue(value),
            Channel::Saturation => self.set_saturation(value),
            Channel::Lightness => self.set_lightness(value),
            Channel::Alpha => self.set_alpha(value),
        }
        clamped
    }

    /// Converts to RGB, carrying the alpha along.
    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(
            f64::from(self.hue),
            f64::from(self.saturation),
            f64::from(self.lightness),
            Some(self.alpha),
        )
    }

    /// Converts to a `#RRGGBB` string. Alpha is dropped.
    pub fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    /// Converts from RGB. A missing alpha means opaque.
    pub fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_hsl(
            f64::from(rgb.r),
            f64::from(rgb.g),
            f64::from(rgb.b),
            rgb.alpha,
        )
    }
}

// ============================================================================
// RGB and hex
// ============================================================================

/// An RGB triple with an optional alpha carried through conversions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red (0–255).
    pub r: u8,
    /// Green (0–255).
    pub g: u8,
    /// Blue (0–255).
    pub b: u8,
    /// Alpha passed through from the source; never derived from r/g/b.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

impl Rgb {
    /// Creates an RGB value without alpha.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Creates an RGB value carrying an alpha.
    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(alpha),
        }
    }

    /// Converts to a `#RRGGBB` string.
    pub fn to_hex(&self) -> Hex {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A `#RRGGBB` string with uppercase digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hex(String);

impl Hex {
    /// The hex string, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.0
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Evaluates one RGB component for a hue phase.
///
/// `h` is wrapped into `[0, 1]` by a single addition or subtraction of 1, so
/// callers must keep it within `[-1, 2]`.
pub fn hue_rotation(m1: f64, m2: f64, h: f64) -> f64 {
    let mut h = h;
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// Converts HSL to RGB.
///
/// - `h`: hue in degrees (0–360)
/// - `s`: saturation in percent (0–100)
/// - `l`: lightness in percent (0–100)
///
/// Inputs are expected in-domain; the result is not re-clamped. `alpha` is
/// carried through unchanged.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64, alpha: Option<f32>) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    let component = |phase: f64| round_half_up(hue_rotation(m1, m2, h + phase) * 255.0) as u8;

    Rgb {
        r: component(1.0 / 3.0),
        g: component(0.0),
        b: component(-1.0 / 3.0),
        alpha,
    }
}

/// Converts RGB (0–255 per channel) to an HSLA [`Color`].
///
/// Gray inputs (all channels equal) yield hue 0 and saturation 0. Hue,
/// saturation and lightness are rounded to integers; a missing alpha means
/// opaque.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64, alpha: Option<f32>) -> Color {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sextant = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        ((b - r) / delta) + 2.0
    } else {
        ((r - g) / delta) + 4.0
    };

    let h = (sextant * 60.0).rem_euclid(360.0);
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Color::new(
        round_half_up(h),
        round_half_up(s * 100.0),
        round_half_up(l * 100.0),
        alpha.map_or(1.0, f64::from),
    )
}

/// Formats an RGB triple as `#RRGGBB` with uppercase digits.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> Hex {
    Hex(format!("#{:02X}{:02X}{:02X}", r, g, b))
}

/// Reads the first three two-digit hex groups of `hex` as red, green and blue.
///
/// Characters that are not hex digits (such as a leading `#`) are skipped.
/// `alpha` is attached unchanged; hex input carries no alpha.
///
/// # Examples
///
/// ```
/// use chroma_core::color::hex_to_rgb;
///
/// let rgb = hex_to_rgb("#00FF00", Some(0.5)).unwrap();
/// assert_eq!((rgb.r, rgb.g, rgb.b, rgb.alpha), (0, 255, 0, Some(0.5)));
/// assert!(hex_to_rgb("#0F0", None).is_err());
/// ```
pub fn hex_to_rgb(hex: &str, alpha: Option<f32>) -> Result<Rgb> {
    let mut pairs = HEX_PAIR.find_iter(hex);
    let mut next = || {
        pairs
            .next()
            .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
    };

    match (next(), next(), next()) {
        (Some(r), Some(g), Some(b)) => Ok(Rgb { r, g, b, alpha }),
        _ => Err(ColorParseError::MalformedColorString {
            input: hex.to_string(),
            expected: 3,
            found: HEX_PAIR.find_iter(hex).count(),
        }),
    }
}

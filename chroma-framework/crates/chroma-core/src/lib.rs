//! Color model for the `Chroma` picker.
//!
//! This crate holds everything about colors that does not depend on user
//! interaction:
//!
//! - [`color`]: the clamped HSLA [`Color`] and its RGB/hex conversions
//! - [`parse`]: reading `#RRGGBB`, `rgb[a](...)` and `hsl[a](...)` strings
//! - [`format`]: writing a color in the current [`DisplayFormat`]
//! - [`geometry`]: points, rectangles and the pointer-to-value mapping
//! - [`gradient`]: gradient stops for the picker's surfaces
//! - [`error`]: error types for parsing
//!
//! # Examples
//!
//! ```
//! use chroma_core::{format_color, parse_color, DisplayFormat};
//!
//! let parsed = parse_color("#00FF00").unwrap();
//! assert_eq!(parsed.format, DisplayFormat::Hex);
//! assert_eq!(
//!     format_color(&parsed.color, DisplayFormat::Rgb),
//!     "rgba(0, 255, 0, 1)"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod error;
pub mod format;
pub mod geometry;
pub mod gradient;
pub mod parse;

pub use color::{clamp, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Channel, Color, Hex, Rgb};
pub use error::{ColorParseError, Result};
pub use format::{format_color, DisplayFormat};
pub use geometry::{coordinate_to_value, Point, PointerSample, Rect, Size};
pub use gradient::GradientStop;
pub use parse::{parse_color, ChannelAdjustment, Component, ParsedColor};

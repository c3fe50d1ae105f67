//! Parsing of host-supplied color strings.
//!
//! Accepted inputs:
//! - `#RRGGBB` (any case; other characters are ignored)
//! - `rgb(R, G, B)` and `rgba(R, G, B, A)`
//! - `hsl(H, S%, L%)` and `hsla(H, S%, L%, A)`
//!
//! The grammar is deliberately loose. A `#` anywhere selects hex, `rgb`
//! anywhere selects RGB, and everything else is read as HSL. Numbers are then
//! taken positionally: the first three are the color channels and the fourth,
//! if present, is alpha (default 1).
//!
//! Values outside a channel's domain are clamped and reported in
//! [`ParsedColor::adjustments`]. Only input with too few tokens is rejected.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::color::{clamp, hex_to_rgb, rgb_to_hsl, Color};
use crate::error::{ColorParseError, Result};
use crate::format::DisplayFormat;

/// A run of digits and dots.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9.]+").expect("Invalid number regex"));

/// Number of positional tokens a color needs before alpha.
const REQUIRED_TOKENS: usize = 3;

/// A numeric token found in a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericToken<'a> {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// The token text.
    pub text: &'a str,
}

impl NumericToken<'_> {
    /// Reads the token as a number.
    pub fn value(&self) -> Result<f64> {
        self.text
            .parse::<f64>()
            .map_err(|_| ColorParseError::InvalidNumber(self.text.to_string()))
    }
}

/// Returns every numeric token of `input`, in order.
pub fn numeric_tokens(input: &str) -> SmallVec<[NumericToken<'_>; 4]> {
    NUMBER
        .find_iter(input)
        .map(|m| NumericToken {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        })
        .collect()
}

/// A component of a parsed string, before conversion to HSLA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Hue in degrees.
    Hue,
    /// Saturation in percent.
    Saturation,
    /// Lightness in percent.
    Lightness,
    /// Red (0–255).
    Red,
    /// Green (0–255).
    Green,
    /// Blue (0–255).
    Blue,
    /// Opacity.
    Alpha,
}

impl Component {
    /// Upper bound of the component's domain. The lower bound is zero.
    pub const fn max(self) -> f64 {
        match self {
            Component::Hue => 360.0,
            Component::Saturation | Component::Lightness => 100.0,
            Component::Red | Component::Green | Component::Blue => 255.0,
            Component::Alpha => 1.0,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Hue => "hue",
            Component::Saturation => "saturation",
            Component::Lightness => "lightness",
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
            Component::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// A value that was outside its domain and was clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelAdjustment {
    /// The component that was out of range.
    pub component: Component,
    /// The value found in the input.
    pub requested: f64,
    /// The value used instead.
    pub applied: f64,
}

/// The result of parsing a color string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedColor {
    /// The parsed color, clamped into its domain.
    pub color: Color,
    /// The format the input was written in.
    pub format: DisplayFormat,
    /// Components that were clamped.
    pub adjustments: SmallVec<[ChannelAdjustment; 4]>,
}

impl ParsedColor {
    /// Returns whether any component had to be clamped.
    pub fn was_clamped(&self) -> bool {
        !self.adjustments.is_empty()
    }
}

/// Parses a color string.
///
/// # Examples
///
/// ```
/// use chroma_core::format::DisplayFormat;
/// use chroma_core::parse::parse_color;
///
/// let parsed = parse_color("rgba(10, 20, 30, 0.5)").unwrap();
/// assert_eq!(parsed.format, DisplayFormat::Rgb);
/// assert_eq!(parsed.color.to_string(), "hsla(210, 50%, 8%, 0.5)");
///
/// let parsed = parse_color("hsl(400, 50%, 50%)").unwrap();
/// assert_eq!(parsed.color.hue(), 360);
/// assert!(parsed.was_clamped());
/// ```
pub fn parse_color(input: &str) -> Result<ParsedColor> {
    if input.trim().is_empty() {
        return Err(ColorParseError::Empty);
    }

    let parsed = if input.contains('#') {
        let rgb = hex_to_rgb(input, None)?;
        ParsedColor {
            color: Color::from_rgb(rgb),
            format: DisplayFormat::Hex,
            adjustments: SmallVec::new(),
        }
    } else if input.contains("rgb") {
        parse_positional(
            input,
            [Component::Red, Component::Green, Component::Blue],
            DisplayFormat::Rgb,
        )?
    } else {
        parse_positional(
            input,
            [Component::Hue, Component::Saturation, Component::Lightness],
            DisplayFormat::Hsl,
        )?
    };

    for adjustment in &parsed.adjustments {
        tracing::debug!(
            component = %adjustment.component,
            requested = adjustment.requested,
            applied = adjustment.applied,
            "clamped out-of-range color component"
        );
    }

    Ok(parsed)
}

fn parse_positional(
    input: &str,
    components: [Component; 3],
    format: DisplayFormat,
) -> Result<ParsedColor> {
    let tokens = numeric_tokens(input);
    if tokens.len() < REQUIRED_TOKENS {
        return Err(ColorParseError::MalformedColorString {
            input: input.to_string(),
            expected: REQUIRED_TOKENS,
            found: tokens.len(),
        });
    }

    let mut adjustments = SmallVec::new();
    let mut read = |token: &NumericToken<'_>, component: Component| -> Result<f64> {
        let requested = token.value()?;
        let applied = clamp(requested, 0.0, component.max());
        if applied != requested {
            adjustments.push(ChannelAdjustment {
                component,
                requested,
                applied,
            });
        }
        Ok(applied)
    };

    let a = read(&tokens[0], components[0])?;
    let b = read(&tokens[1], components[1])?;
    let c = read(&tokens[2], components[2])?;
    let alpha = match tokens.get(3) {
        Some(token) => read(token, Component::Alpha)?,
        None => 1.0,
    };

    let color = match format {
        DisplayFormat::Rgb => rgb_to_hsl(a, b, c, None).with_alpha(alpha),
        _ => Color::new(a, b, c, alpha),
    };

    Ok(ParsedColor {
        color,
        format,
        adjustments,
    })
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s).map(|parsed| parsed.color)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self> {
        parse_color(value).map(|parsed| parsed.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod dispatch_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_hex() {
            let parsed = parse_color("#00FF00").unwrap();
            assert_eq!(parsed.format, DisplayFormat::Hex);
            assert_eq!(parsed.color, Color::hsl(120.0, 100.0, 50.0));
        }

        #[test]
        fn test_rgba() {
            let parsed = parse_color("rgba(10, 20, 30, 0.5)").unwrap();
            assert_eq!(parsed.format, DisplayFormat::Rgb);
            assert_eq!(parsed.color, rgb_to_hsl(10.0, 20.0, 30.0, Some(0.5)));
            assert_eq!(parsed.color.alpha(), 0.5);
        }

        #[test]
        fn test_rgb_without_spaces() {
            let parsed = parse_color("rgb(255,0,0)").unwrap();
            assert_eq!(parsed.color, Color::RED);
            assert_eq!(parsed.color.alpha(), 1.0);
        }

        #[test]
        fn test_hsla() {
            let parsed = parse_color("hsla(200, 40%, 30%, 0.25)").unwrap();
            assert_eq!(parsed.format, DisplayFormat::Hsl);
            assert_eq!(parsed.color, Color::new(200.0, 40.0, 30.0, 0.25));
            assert!(!parsed.was_clamped());
        }

        #[test]
        fn test_bare_numbers_are_hsl() {
            let parsed = parse_color("120 50 50").unwrap();
            assert_eq!(parsed.format, DisplayFormat::Hsl);
            assert_eq!(parsed.color, Color::hsl(120.0, 50.0, 50.0));
        }

        #[test]
        fn test_color_from_str() {
            let c: Color = "hsl(10, 20%, 30%)".parse().unwrap();
            assert_eq!(c, Color::hsl(10.0, 20.0, 30.0));
            assert_eq!(Color::try_from("#FFFFFF").unwrap(), Color::WHITE);
        }
    }

    mod error_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty() {
            assert_eq!(parse_color(""), Err(ColorParseError::Empty));
            assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        }

        #[test]
        fn test_too_few_tokens() {
            assert_eq!(
                parse_color("rgb(1, 2)"),
                Err(ColorParseError::MalformedColorString {
                    input: "rgb(1, 2)".to_string(),
                    expected: 3,
                    found: 2,
                })
            );
        }

        #[test]
        fn test_named_color_rejected() {
            assert!(matches!(
                parse_color("red"),
                Err(ColorParseError::MalformedColorString { found: 0, .. })
            ));
        }

        #[test]
        fn test_short_hex_rejected() {
            assert!(matches!(
                parse_color("#FFF"),
                Err(ColorParseError::MalformedColorString { .. })
            ));
        }

        #[test]
        fn test_invalid_number() {
            assert_eq!(
                parse_color("hsl(1.2.3, 50%, 50%)"),
                Err(ColorParseError::InvalidNumber("1.2.3".to_string()))
            );
        }
    }

    mod clamping_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_hsl_out_of_range_is_clamped() {
            let parsed = parse_color("hsla(400, 150%, 50%, 3)").unwrap();
            assert_eq!(parsed.color, Color::new(360.0, 100.0, 50.0, 1.0));
            let components: Vec<Component> =
                parsed.adjustments.iter().map(|a| a.component).collect();
            assert_eq!(
                components,
                vec![Component::Hue, Component::Saturation, Component::Alpha]
            );
            assert_eq!(parsed.adjustments[0].requested, 400.0);
            assert_eq!(parsed.adjustments[0].applied, 360.0);
        }

        #[test]
        fn test_rgb_out_of_range_is_clamped() {
            let parsed = parse_color("rgb(300, 0, 0)").unwrap();
            assert_eq!(parsed.color, Color::RED);
            assert_eq!(parsed.adjustments.len(), 1);
            assert_eq!(parsed.adjustments[0].component, Component::Red);
        }

        #[test]
        fn test_alpha_rounds_the_same_for_rgb_and_hsl() {
            for alpha in ["0.005", "0.015", "0.505"] {
                let rgb = parse_color(&format!("rgba(10, 20, 30, {alpha})")).unwrap();
                let hsl = parse_color(&format!("hsla(10, 20%, 30%, {alpha})")).unwrap();
                assert_eq!(rgb.color.alpha(), hsl.color.alpha(), "alpha {alpha}");
            }
            let parsed = parse_color("rgba(10, 20, 30, 0.505)").unwrap();
            assert_eq!(parsed.color.alpha(), 0.51);
        }

        #[test]
        fn test_minus_sign_is_not_part_of_a_token() {
            let parsed = parse_color("hsl(-20, 50%, 50%)").unwrap();
            assert_eq!(parsed.color.hue(), 20);
        }
    }

    mod token_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_token_offsets() {
            let tokens = numeric_tokens("hsla(10, 20%, 30%, 0.5)");
            let spans: Vec<(usize, usize, &str)> =
                tokens.iter().map(|t| (t.start, t.end, t.text)).collect();
            assert_eq!(
                spans,
                vec![(5, 7, "10"), (9, 11, "20"), (14, 16, "30"), (19, 22, "0.5")]
            );
        }
    }
}

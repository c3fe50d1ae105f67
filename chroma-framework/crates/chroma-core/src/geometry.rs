//! Geometry types for describing picker controls and pointer positions.
//!
//! This module provides the primitives a host uses to tell the picker where
//! its controls are and where the pointer is:
//! - [`Point`]: A 2D point in page coordinates (may be negative)
//! - [`Size`]: A 2D size in pixels
//! - [`Rect`]: A rectangle combining position and size
//! - [`PointerSample`]: A pointer offset relative to a control
//!
//! and the mapping from a pointer offset to a channel value,
//! [`coordinate_to_value`].

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Rounds to the nearest integer, with halves rounded toward positive infinity.
///
/// `f64::round` rounds halves away from zero, which would map an offset of
/// `-0.5` to `-1` rather than `0`.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Maps a 1D pixel offset within a control to a logical channel value.
///
/// Returns `round((offset / extent) * max)`. The result is not clamped; an
/// offset outside the control (a drag that left its bounds) maps outside
/// `[0, max]` and callers clamp it into the channel domain.
///
/// A non-positive `extent` (a collapsed control) maps every offset to `0`.
///
/// # Examples
///
/// ```
/// use chroma_core::geometry::coordinate_to_value;
///
/// assert_eq!(coordinate_to_value(90.0, 180.0, 360.0), 180.0);
/// assert_eq!(coordinate_to_value(0.0, 200.0, 100.0), 0.0);
/// ```
#[inline]
pub fn coordinate_to_value(offset: f64, extent: f64, max: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    round_half_up((offset / extent) * max)
}

/// A 2D point with signed integer coordinates.
///
/// Pointer events report page coordinates; points to the left of or above a
/// control produce negative offsets relative to it.
///
/// # Examples
///
/// ```
/// use chroma_core::geometry::Point;
///
/// let p1 = Point::new(10, 20);
/// let p2 = Point::new(5, 5);
///
/// assert_eq!(p1 + p2, Point::new(15, 25));
/// assert_eq!(p1 - p2, Point::new(5, 15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// The x coordinate.
    pub x: i32,
    /// The y coordinate.
    pub y: i32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point offset by the given amounts.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// The width in pixels.
    pub width: u32,
    /// The height in pixels.
    pub height: u32,
}

impl Size {
    /// A zero-sized area.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a new size with the given dimensions.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle defined by its top-left corner and size.
///
/// The coordinate system uses (0, 0) as the top-left corner of the page, with
/// x increasing to the right and y increasing downward:
///
/// ```text
/// (0,0) ──────► x
///   │
///   │
///   ▼
///   y
/// ```
///
/// # Examples
///
/// ```
/// use chroma_core::geometry::{Point, Rect};
///
/// let rect = Rect::new(10, 20, 180, 20);
/// assert_eq!(rect.right(), 190);
/// assert_eq!(rect.bottom(), 40);
/// assert!(rect.contains_point(Point::new(50, 30)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// The x coordinate of the left edge.
    pub x: i32,
    /// The y coordinate of the top edge.
    pub y: i32,
    /// The width of the rectangle.
    pub width: u32,
    /// The height of the rectangle.
    pub height: u32,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle at the given position with the given size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the position (top-left corner) of the rectangle.
    #[inline]
    pub const fn position(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Returns the size of the rectangle.
    #[inline]
    pub const fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// The x coordinate of the left edge.
    #[inline]
    pub const fn left(self) -> i32 {
        self.x
    }

    /// The y coordinate of the top edge.
    #[inline]
    pub const fn top(self) -> i32 {
        self.y
    }

    /// The x coordinate one past the right edge.
    #[inline]
    pub fn right(self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    /// The y coordinate one past the bottom edge.
    #[inline]
    pub fn bottom(self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// Returns whether the rectangle has zero area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns whether the point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom exclusive.
    #[inline]
    pub fn contains_point(self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Returns the pointer offset of `point` relative to this rectangle.
    ///
    /// `x` is measured from the left edge; `y` is measured upward from the
    /// bottom edge, matching gradients whose value increases upward.
    #[inline]
    pub fn sample(self, point: Point) -> PointerSample {
        PointerSample {
            x: f64::from(point.x) - f64::from(self.left()),
            y: f64::from(self.bottom()) - f64::from(point.y),
        }
    }
}

/// A pointer offset relative to a control.
///
/// Only used as input to [`coordinate_to_value`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Distance from the control's left edge.
    pub x: f64,
    /// Distance from the control's bottom edge, increasing upward.
    pub y: f64,
}

impl PointerSample {
    /// Creates a new sample.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

//! Pointer and scroll input types.
//!
//! Mouse and touch input share one [`PointerEvent`] type: touch start, move
//! and end map to primary-button down, drag and up. Positions are page
//! coordinates as [`Point`]s so they can be tested against control rectangles
//! directly.

use chroma_core::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::keyboard::KeyModifiers;

/// Represents a pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    /// Left mouse button (primary). Touch contacts report this button.
    #[default]
    Left,
    /// Right mouse button (secondary).
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

impl PointerButton {
    /// Returns true for the secondary (context menu) button.
    #[must_use]
    pub fn is_secondary(self) -> bool {
        self == PointerButton::Right
    }
}

impl fmt::Display for PointerButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerButton::Left => write!(f, "left"),
            PointerButton::Right => write!(f, "right"),
            PointerButton::Middle => write!(f, "middle"),
        }
    }
}

impl From<crossterm::event::MouseButton> for PointerButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        match btn {
            crossterm::event::MouseButton::Left => PointerButton::Left,
            crossterm::event::MouseButton::Right => PointerButton::Right,
            crossterm::event::MouseButton::Middle => PointerButton::Middle,
        }
    }
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    /// A button was pressed down.
    Down(PointerButton),
    /// A button was released.
    Up(PointerButton),
    /// The pointer moved while a button was held.
    Drag(PointerButton),
    /// The pointer moved without any buttons pressed.
    Moved,
}

impl PointerEventKind {
    /// Returns true if this is a button down event.
    #[must_use]
    pub fn is_down(&self) -> bool {
        matches!(self, PointerEventKind::Down(_))
    }

    /// Returns true if this is a button up event.
    #[must_use]
    pub fn is_up(&self) -> bool {
        matches!(self, PointerEventKind::Up(_))
    }

    /// Returns true if the pointer moved, with or without a button held.
    #[must_use]
    pub fn is_motion(&self) -> bool {
        matches!(self, PointerEventKind::Drag(_) | PointerEventKind::Moved)
    }

    /// Returns the button associated with this event, if any.
    #[must_use]
    pub fn button(&self) -> Option<PointerButton> {
        match self {
            PointerEventKind::Down(btn)
            | PointerEventKind::Up(btn)
            | PointerEventKind::Drag(btn) => Some(*btn),
            PointerEventKind::Moved => None,
        }
    }
}

impl fmt::Display for PointerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerEventKind::Down(btn) => write!(f, "down({btn})"),
            PointerEventKind::Up(btn) => write!(f, "up({btn})"),
            PointerEventKind::Drag(btn) => write!(f, "drag({btn})"),
            PointerEventKind::Moved => write!(f, "moved"),
        }
    }
}

/// A complete pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerEvent {
    /// The kind of pointer event.
    pub kind: PointerEventKind,
    /// Page position of the pointer.
    pub position: Point,
    /// Active keyboard modifiers during this event.
    #[serde(default)]
    pub modifiers: KeyModifiers,
}

impl PointerEvent {
    /// Creates a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, position: Point, modifiers: KeyModifiers) -> Self {
        Self {
            kind,
            position,
            modifiers,
        }
    }

    /// Creates a button down event.
    #[must_use]
    pub const fn down(button: PointerButton, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down(button), Point::new(x, y), KeyModifiers::NONE)
    }

    /// Creates a button up event.
    #[must_use]
    pub const fn up(button: PointerButton, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Up(button), Point::new(x, y), KeyModifiers::NONE)
    }

    /// Creates a drag event.
    #[must_use]
    pub const fn drag(button: PointerButton, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Drag(button), Point::new(x, y), KeyModifiers::NONE)
    }

    /// Creates a move event with no button held.
    #[must_use]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Moved, Point::new(x, y), KeyModifiers::NONE)
    }

    /// A finger touching down.
    #[must_use]
    pub const fn touch_start(x: i32, y: i32) -> Self {
        Self::down(PointerButton::Left, x, y)
    }

    /// A finger moving while in contact.
    #[must_use]
    pub const fn touch_move(x: i32, y: i32) -> Self {
        Self::drag(PointerButton::Left, x, y)
    }

    /// A finger lifting.
    #[must_use]
    pub const fn touch_end(x: i32, y: i32) -> Self {
        Self::up(PointerButton::Left, x, y)
    }

    /// Returns the same event with the given modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns true if the Shift modifier was held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@({},{})", self.kind, self.position.x, self.position.y)
    }
}

/// Direction for scroll events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Scrolling up. Increases values.
    Up,
    /// Scrolling down. Decreases values.
    Down,
}

impl ScrollDirection {
    /// Returns the sign of the value change for this direction.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            ScrollDirection::Up => 1.0,
            ScrollDirection::Down => -1.0,
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollDirection::Up => write!(f, "up"),
            ScrollDirection::Down => write!(f, "down"),
        }
    }
}

/// A wheel event at a page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScrollEvent {
    /// Scroll direction.
    pub direction: ScrollDirection,
    /// Page position of the pointer.
    pub position: Point,
    /// Active keyboard modifiers during this event.
    #[serde(default)]
    pub modifiers: KeyModifiers,
}

impl ScrollEvent {
    /// Creates a scroll event without modifiers.
    #[must_use]
    pub const fn new(direction: ScrollDirection, x: i32, y: i32) -> Self {
        Self {
            direction,
            position: Point::new(x, y),
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Returns the same event with the given modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns true if the Shift modifier was held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Returns true if the Alt modifier was held.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }
}

impl fmt::Display for ScrollEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scroll_{}@({},{})",
            self.direction, self.position.x, self.position.y
        )
    }
}

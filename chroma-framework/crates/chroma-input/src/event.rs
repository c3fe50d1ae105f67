//! Event envelope and routing types.
//!
//! A host delivers each input as an [`Event`] together with the
//! [`EventTarget`] it landed on. The picker does not know the host's element
//! tree, so the host decides whether a press hit the bound field, the picker
//! panel or something else; the picker resolves individual controls itself
//! from the pointer position.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::keyboard::KeyEvent;
use crate::mouse::{PointerButton, PointerEvent, PointerEventKind, ScrollDirection, ScrollEvent};

/// Represents any input event the picker understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    /// A pointer press, release or movement.
    Pointer(PointerEvent),
    /// A wheel step.
    Scroll(ScrollEvent),
    /// A key press.
    Key(KeyEvent),
    /// The text of the target field was replaced by the user.
    Text(String),
}

impl Event {
    /// Returns the pointer event if this is a `Pointer` variant.
    #[must_use]
    pub fn as_pointer(&self) -> Option<&PointerEvent> {
        match self {
            Event::Pointer(pointer) => Some(pointer),
            _ => None,
        }
    }

    /// Returns the key event if this is a `Key` variant.
    #[must_use]
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Converts a terminal event.
    ///
    /// Returns `None` for events with no picker meaning (resize, focus,
    /// paste, key release and horizontal scrolling).
    #[must_use]
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CT, KeyEventKind, MouseEventKind as M};

        match event {
            CT::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key.into())),
            CT::Mouse(mouse) => {
                let x = i32::from(mouse.column);
                let y = i32::from(mouse.row);
                let modifiers = mouse.modifiers.into();
                let kind = match mouse.kind {
                    M::Down(btn) => PointerEventKind::Down(btn.into()),
                    M::Up(btn) => PointerEventKind::Up(btn.into()),
                    M::Drag(btn) => PointerEventKind::Drag(btn.into()),
                    M::Moved => PointerEventKind::Moved,
                    M::ScrollUp | M::ScrollDown => {
                        let direction = if mouse.kind == M::ScrollUp {
                            ScrollDirection::Up
                        } else {
                            ScrollDirection::Down
                        };
                        let scroll = ScrollEvent::new(direction, x, y).with_modifiers(modifiers);
                        return Some(Event::Scroll(scroll));
                    }
                    M::ScrollLeft | M::ScrollRight => return None,
                };
                Some(Event::Pointer(
                    PointerEvent::new(kind, chroma_core::Point::new(x, y), modifiers),
                ))
            }
            _ => None,
        }
    }
}

impl From<PointerEvent> for Event {
    fn from(event: PointerEvent) -> Self {
        Event::Pointer(event)
    }
}

impl From<ScrollEvent> for Event {
    fn from(event: ScrollEvent) -> Self {
        Event::Scroll(event)
    }
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Event::Key(event)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Pointer(pointer) => write!(f, "Pointer({pointer})"),
            Event::Scroll(scroll) => write!(f, "Scroll({scroll})"),
            Event::Key(key) => write!(f, "Key({key})"),
            Event::Text(text) => write!(f, "Text({text:?})"),
        }
    }
}

/// Where an event landed, as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTarget {
    /// The host text field the picker is attached to.
    Bound,
    /// The picker panel (any of its controls, or the gaps between them).
    Picker,
    /// The picker's own values text field.
    ValuesField {
        /// Byte offset of the text cursor.
        cursor: usize,
    },
    /// Anywhere else on the page.
    Outside,
}

impl EventTarget {
    /// Returns true if the target is part of the picker panel.
    #[must_use]
    pub fn is_picker(&self) -> bool {
        matches!(self, EventTarget::Picker | EventTarget::ValuesField { .. })
    }
}

impl fmt::Display for EventTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTarget::Bound => write!(f, "bound"),
            EventTarget::Picker => write!(f, "picker"),
            EventTarget::ValuesField { cursor } => write!(f, "values_field[{cursor}]"),
            EventTarget::Outside => write!(f, "outside"),
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventResult {
    /// Event was handled; the host should not act on it further.
    Handled,
    /// Event was not handled.
    #[default]
    Ignored,
}

impl EventResult {
    /// Returns true if the event was handled.
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }

    /// Returns true if the event was ignored.
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Handled
        } else {
            Self::Ignored
        }
    }
}

/// Combines multiple event results (handled if any handled).
impl std::ops::BitOr for EventResult {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        if self.is_handled() || rhs.is_handled() {
            Self::Handled
        } else {
            Self::Ignored
        }
    }
}

/// Returns true for a press that may open the picker.
///
/// Secondary-button presses are reserved for the host's context menu.
#[must_use]
pub fn is_activating_press(event: &PointerEvent) -> bool {
    matches!(event.kind, PointerEventKind::Down(btn) if btn != PointerButton::Right)
}

//! # `Chroma` Input
//!
//! Input event types for the `Chroma` color picker.
//!
//! The picker core is renderer-agnostic: a browser host, a terminal host or a
//! test script all deliver the same events.
//!
//! - **Pointer**: presses, releases and drags at page coordinates. Touch maps
//!   to the primary button.
//! - **Scroll**: wheel steps with modifiers (Shift for ×10, Alt to redirect
//!   the saturation/lightness square to saturation).
//! - **Keyboard**: Enter, Escape and the vertical arrows.
//! - **Text**: the user replaced the content of a text field.
//!
//! Terminal hosts can convert `crossterm` events with
//! [`Event::from_crossterm`].
//!
//! ## Example
//!
//! ```
//! use chroma_input::{Event, EventTarget, KeyCode, KeyEvent, PointerButton, PointerEvent};
//!
//! let events = [
//!     (EventTarget::Bound, Event::from(PointerEvent::down(PointerButton::Left, 5, 5))),
//!     (EventTarget::Bound, Event::from(KeyEvent::plain(KeyCode::Esc))),
//! ];
//! assert!(events[0].1.as_pointer().is_some());
//! assert_eq!(events[1].1.as_key().map(|k| k.code), Some(KeyCode::Esc));
//! ```

pub mod event;
pub mod keyboard;
pub mod mouse;

pub use event::{is_activating_press, Event, EventResult, EventTarget};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use mouse::{PointerButton, PointerEvent, PointerEventKind, ScrollDirection, ScrollEvent};

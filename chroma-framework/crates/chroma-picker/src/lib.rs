//! `Chroma` Picker
//!
//! Headless state for an HSLA color picker. The widget owns one color and
//! keeps everything derived from it consistent: the values text, an optional
//! bound field, the hue and alpha gradients and the handle positions.
//!
//! # Overview
//!
//! - **[`ColorPicker`]**: the widget. Feed it [`chroma_input::Event`]s with
//!   an [`chroma_input::EventTarget`] and read back what to draw.
//! - **[`ControlLayout`]**: page rectangles of the preview swatch, hue strip,
//!   saturation/lightness square and alpha strip.
//! - **[`PickerOptions`]**: behavior switches, loadable from TOML.
//! - **[`DragState`] / [`Visibility`]**: the two state machines.
//! - **[`ColorChange`]**: what the change callback receives.
//!
//! # Example
//!
//! ```
//! use chroma_input::{Event, EventTarget, KeyCode, KeyEvent};
//! use chroma_picker::{ColorPicker, PickerOptions};
//!
//! let mut picker = ColorPicker::new(PickerOptions::default());
//! picker.bind("rgb(0, 0, 255)").unwrap();
//!
//! picker
//!     .handle_event(EventTarget::Bound, &Event::from(KeyEvent::plain(KeyCode::Enter)))
//!     .unwrap();
//! assert!(picker.is_active());
//! assert_eq!(picker.values_text(), "rgba(0, 0, 255, 1)");
//! ```

#![allow(clippy::type_complexity)]

pub mod change;
pub mod control;
pub mod error;
pub mod options;
pub mod picker;
pub mod state;

pub use change::{ChangeCallback, ColorChange};
pub use control::{ControlKind, ControlLayout, HandleOffset};
pub use error::{PickerError, Result};
pub use options::PickerOptions;
pub use picker::ColorPicker;
pub use state::{DragState, Visibility};

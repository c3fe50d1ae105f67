//! Chroma: an embeddable color picker core
//!
//! This crate bundles the picker's building blocks:
//! - an HSLA color model with RGB and hex conversion, parsing and formatting
//! - renderer-agnostic pointer, wheel, keyboard and text events
//! - the picker widget state: controls, drag and visibility machines, bound
//!   field syncing and change notifications
//!
//! Nothing here draws. Hosts render the gradient stops, handle offsets and
//! text the picker exposes, and feed user input back as events.
//!
//! # Example
//!
//! ```
//! use chroma_framework::prelude::*;
//!
//! let mut picker = ColorPicker::new(PickerOptions::default());
//! picker.bind("#00FF00").unwrap();
//! picker.cycle_display();
//!
//! assert_eq!(picker.color(), Color::hsl(120.0, 100.0, 50.0));
//! assert_eq!(picker.values_text(), "hsla(120, 100%, 50%, 1)");
//! ```

pub use chroma_core as core;
pub use chroma_input as input;
pub use chroma_picker as picker;

pub mod prelude {
    pub use chroma_core::{
        format_color, parse_color, Color, DisplayFormat, Hex, Point, Rect, Rgb, Size,
    };
    pub use chroma_input::{
        Event, EventResult, EventTarget, KeyCode, KeyEvent, KeyModifiers, PointerButton,
        PointerEvent, ScrollDirection, ScrollEvent,
    };
    pub use chroma_picker::{
        ColorChange, ColorPicker, ControlKind, ControlLayout, PickerError, PickerOptions,
    };
}

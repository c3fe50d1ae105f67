//! Drag and visibility state machines.
//!
//! ```text
//!                press on hue / sat-light / alpha
//!   DragState:  Idle ───────────────────────────────► Dragging(control)
//!                ▲                                          │
//!                └──────────── release anywhere ────────────┘
//!
//!                show (press on bound field, Enter)
//!   Visibility: Hidden ─────────────────────────────► Active
//!                ▲                                       │
//!                └──── hide (press outside) / cancel ────┘
//! ```

use std::fmt;

use serde::Serialize;

use crate::control::ControlKind;

/// Whether a pointer drag is editing a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag started on this control; moves anywhere on the page edit it.
    Dragging(ControlKind),
}

impl DragState {
    /// State after a press on `control`.
    ///
    /// Presses on the preview or outside any control leave the state as is.
    #[must_use]
    pub fn press(self, control: Option<ControlKind>) -> Self {
        match control {
            Some(kind) if kind.is_draggable() => DragState::Dragging(kind),
            _ => self,
        }
    }

    /// State after the button is released.
    #[must_use]
    pub fn release(self) -> Self {
        DragState::Idle
    }

    /// Returns the control being dragged, if any.
    pub fn control(self) -> Option<ControlKind> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(kind) => Some(kind),
        }
    }

    /// Returns true while a drag is in progress.
    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragState::Idle => write!(f, "idle"),
            DragState::Dragging(kind) => write!(f, "dragging({kind})"),
        }
    }
}

/// Whether the picker panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Panel is hidden.
    #[default]
    Hidden,
    /// Panel is shown and accepting input.
    Active,
}

impl Visibility {
    /// Returns true when the panel is shown.
    pub fn is_active(self) -> bool {
        self == Visibility::Active
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Hidden => write!(f, "hidden"),
            Visibility::Active => write!(f, "active"),
        }
    }
}

//! Error types for the picker.

use chroma_core::ColorParseError;
use thiserror::Error;

/// Errors that can occur while driving a picker.
///
/// None of these leave the picker in a broken state: a rejected text input
/// keeps the previous color and the widget stays interactive.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Text typed into the values field or bound field was not a color.
    #[error("invalid color: {0}")]
    Parse(#[from] ColorParseError),

    /// Failed to read an options file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An options file was not valid TOML for [`PickerOptions`](crate::PickerOptions).
    #[error("invalid picker options: {0}")]
    Config(#[from] toml::de::Error),

    /// [`revert`](crate::ColorPicker::revert) was called before the picker
    /// was ever shown.
    #[error("no snapshot to revert to; the picker has not been shown")]
    NoSnapshot,
}

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;

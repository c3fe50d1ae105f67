//! Error types for color parsing.

use thiserror::Error;

/// Error type for color parsing operations.
///
/// Only structurally unparsable input is an error. Numeric channels that fall
/// outside their domain are clamped and reported through
/// [`ChannelAdjustment`](crate::parse::ChannelAdjustment) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty or only whitespace.
    #[error("empty input")]
    Empty,

    /// The input did not contain enough numeric or hex tokens.
    #[error("malformed color string {input:?}: expected {expected} tokens, found {found}")]
    MalformedColorString {
        /// The rejected input.
        input: String,
        /// Minimum number of tokens required.
        expected: usize,
        /// Number of tokens found.
        found: usize,
    },

    /// A numeric token could not be read as a number (e.g. `1.2.3`).
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Result type alias for color parsing.
pub type Result<T> = std::result::Result<T, ColorParseError>;

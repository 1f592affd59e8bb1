//! Errors used throughout the crate.
//!
//! Move legality itself is boolean and never produces an error: an illegal
//! attempt simply deselects. `ChessErrors` covers the fallible edges around
//! the rules instead, such as parsing board layouts and square names, checking
//! click coordinates coming from a renderer, and reading session
//! configuration.
//!
//! Usage guidelines:
//! - Library functions return `Result<..., ChessErrors>` for bad input and
//!   never panic on it.
//! - Front ends (the terminal loop, a browser bridge) are expected to show the
//!   `Display` text to the user and keep running.

use thiserror::Error;

/// Unified error type for the crate.
///
/// Variants carry the offending value so callers can print precise
/// diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Row or column outside `0..=7`, as received from a click.
    #[error("square coordinates out of range: row {row}, col {col} (both must be 0-7)")]
    InvalidRowOrCol { row: u8, col: u8 },

    /// Square index outside `0..=63`.
    #[error("square index out of range: {0} (must be 0-63)")]
    InvalidSquareIndex(u8),

    /// A square name such as `e2` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// Unexpected character inside the rows field of a board layout.
    #[error("invalid board layout token '{0}'")]
    InvalidLayoutToken(char),

    /// Board layout with a malformed structure (wrong field or row count,
    /// rows not summing to eight squares).
    #[error("malformed board layout: {0}")]
    InvalidLayoutForm(String),

    /// Side-to-move field that is neither `w` nor `b`.
    #[error("invalid side to move: {0}")]
    InvalidSideToMove(String),

    /// Session configuration value that could not be interpreted.
    #[error("invalid value '{value}' for {key}")]
    InvalidConfigValue { key: String, value: String },
}

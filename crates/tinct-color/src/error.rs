//! Error types for color parsing.
//!
//! Conversion, constraining and rounding never fail; only the strict
//! string entry points in [`crate::parse`] return these.

use thiserror::Error;

/// Color parsing error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Text is not a recognized CSS color.
    #[error("cannot parse color {input:?}: {reason}")]
    Parse {
        /// Input as given.
        input: String,
        /// What went wrong.
        reason: &'static str,
    },

    /// Hex validation or registry error.
    #[error(transparent)]
    Core(#[from] tinct_core::CoreError),
}

/// Result type for color parsing.
pub type ColorResult<T> = Result<T, ColorError>;

//! Error types for tinct-core.
//!
//! Only configuration and strict parsing can fail. Conversions and
//! arithmetic never return errors; malformed input there falls back to a
//! neutral color instead (see `tinct-color`).
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{CoreError, Ranges};
//!
//! let err = Ranges::new(255.0, 360.0, 100.0, 100.0, 0.0).unwrap_err();
//! assert!(matches!(err, CoreError::InvalidRange { .. }));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised by the range registry and strict parsers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Channel key is not one of `r`, `g`, `b`, `h`, `s`, `l`, `a`.
    #[error("invalid channel: {0:?} (expected one of r, g, b, h, s, l, a)")]
    InvalidChannel(String),

    /// Color kind is not one of `rgb`, `hsl`, `hex`.
    #[error("invalid color kind: {0:?} (expected rgb, hsl or hex)")]
    InvalidKind(String),

    /// A channel maximum is not a positive integer.
    ///
    /// Ranges are programmer configuration, so this is raised eagerly
    /// instead of guessing a fallback.
    #[error("invalid range for channel '{channel}': {value} ({reason})")]
    InvalidRange {
        /// Channel the maximum belongs to.
        channel: &'static str,
        /// Offending value.
        value: f64,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The process-wide registry was already installed or read.
    #[error("range registry is already initialized")]
    AlreadyInstalled,

    /// Hex string failed validation.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Range file could not be read.
    #[error("failed to read range file {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Range file is not valid YAML or has non-numeric maxima.
    #[error("range file parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

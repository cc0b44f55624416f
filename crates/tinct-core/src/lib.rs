//! # tinct-core
//!
//! Core types for tinct color handling.
//!
//! - [`Ranges`], [`registry`], [`range_of`] - the numeric domain of each channel
//! - [`Rgb`], [`Hsl`], [`Hex`], [`Color`] - color values and their tagged union
//! - [`is_rgb`], [`is_hsl`], [`is_hex`], [`is_color`] - validators for untyped input
//! - [`CoreError`] - configuration and parsing errors
//!
//! ## Crate Structure
//!
//! ```text
//! tinct-math (scalar helpers)
//!    ^
//!    |
//! tinct-core (this crate)
//!    ^
//!    |
//! tinct-color (conversion, constrain/round, formatting, parsing)
//!    ^
//!    |
//! tinct-ops (arithmetic, tone curves, LiveColor)
//! ```
//!
//! ## Concurrency
//!
//! The range registry is written at most once, before the first read, and
//! is immutable afterwards. Color values are `Copy`/`Clone` data and can be
//! shared freely between threads.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod range;
pub mod validate;

pub use color::{is_hex_str, Color, ColorKind, Hex, Hsl, Rgb};
pub use error::{CoreError, CoreResult};
pub use range::{install, range_of, registry, AlphaProfile, Channel, ChannelRange, Ranges};
pub use validate::{is_color, is_hex, is_hsl, is_rgb};

/// Prelude module for convenient imports.
///
/// ```
/// use tinct_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, ColorKind, Hex, Hsl, Rgb};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::range::{registry, Channel, Ranges};
}

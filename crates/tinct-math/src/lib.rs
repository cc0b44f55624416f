//! # tinct-math
//!
//! Scalar helpers shared by the tinct color crates.
//!
//! - Range mapping ([`map`], [`normalize`], [`clamp`])
//! - Circular arithmetic for hue ([`euclidean_modulo`], [`segment`])
//! - Decimal rounding ([`round_to`], [`is_int`])
//! - Tone curve shapes ([`cubic_bezier`], [`parabola`])
//!
//! All functions work on `f64`; channel values in tinct are plain numbers
//! scaled to the ranges of the range registry.
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{map, euclidean_modulo};
//!
//! assert_eq!(map(0.5, 0.0, 1.0, 0.0, 255.0, false), 127.5);
//! assert_eq!(euclidean_modulo(-30.0, 360.0), 330.0);
//! ```
//!
//! # Used By
//!
//! - `tinct-color` - HSL/RGB conversion and rounding
//! - `tinct-ops` - curve transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
mod interp;

pub use curve::*;
pub use interp::*;

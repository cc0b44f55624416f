//! # tinct-color
//!
//! Color model engine on top of the tinct-core value types:
//!
//! - **Conversion** - RGB <-> HSL <-> HEX, always pivoting through RGB
//! - **Constrain / round** - clamp channels, wrap hue, round with range precision
//! - **Formatting** - CSS `rgb()/rgba()/hsl()/hsla()` strings
//! - **Parsing** - CSS color text back into a [`Color`](tinct_core::Color)
//! - **Random** - uniformly drawn RGB colors
//!
//! Every function except [`parse`] is total: malformed input falls back to a
//! neutral value instead of failing.
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_core::{Color, Hsl};
//! use tinct_color::{constrain, round, to_hex, to_rgb, to_string};
//!
//! let hsl = Color::Hsl(Hsl::new(390.0, 100.0, 50.0));
//! let hsl = round(&constrain(&hsl), false);
//! assert_eq!(to_string(&hsl), "hsl(30, 100%, 50%)");
//! assert_eq!(to_hex(&hsl).as_str(), "#ff8000");
//! assert_eq!(to_rgb(&hsl).r, 255.0);
//! ```
//!
//! # Dependencies
//!
//! - [`tinct-core`] - value types and the range registry
//! - [`tinct-math`] - clamp, map, modulo and rounding helpers
//!
//! # Used By
//!
//! - `tinct-ops` - arithmetic and curves
//! - `tinct-cli` - the `tinct` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod constrain;
pub mod convert;
mod error;
pub mod format;
pub mod parse;
pub mod random;

pub use constrain::{
    constrain, constrain_hex, constrain_hsl, constrain_rgb, hsl, rgb, round, round_hsl, round_rgb,
};
pub use convert::{
    hex_str_to_rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, map_rgb, normalize_rgb,
    rgb_to_hex, rgb_to_hsl, to_hex, to_hsl, to_rgb,
};
pub use error::{ColorError, ColorResult};
pub use format::{css_alpha, hsl_to_string, rgb_to_string, to_string};
pub use parse::parse;
pub use random::{random_rgb, random_rgb_with};

/// Prelude with commonly used functions
pub mod prelude {
    pub use crate::{
        constrain,
        parse,
        round,
        to_hex,
        to_hsl,
        to_rgb,
        to_string,
        ColorError,
        ColorResult,
    };
}

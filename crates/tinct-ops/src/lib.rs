//! # tinct-ops
//!
//! Operations on tinct colors.
//!
//! # Modules
//!
//! - [`arithmetic`] - add, sub, multiply, invert
//! - [`curves`] - contrast, color and brightness tone curves
//! - [`live`] - [`LiveColor`], a mutable color for interactive use
//!
//! All free functions return a new value of the same kind as their input;
//! [`LiveColor`] applies the same operations in place.
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{Color, Hsl, Rgb};
//! use tinct_ops::{add, invert, brightness_curve, Operand};
//!
//! let red = Color::Rgb(Rgb::new(255.0, 0.0, 0.0));
//! assert_eq!(invert(&red), Color::Rgb(Rgb::new(0.0, 255.0, 255.0)));
//!
//! let shifted = add(&Color::Hsl(Hsl::new(350.0, 50.0, 50.0)), &Hsl::new(20.0, 0.0, 0.0).into());
//! assert_eq!(shifted, Color::Hsl(Hsl::new(10.0, 50.0, 50.0)));
//!
//! let lighter = brightness_curve(&Color::Rgb(Rgb::gray(128.0)), 0.05);
//! assert!(lighter.as_rgb().unwrap().r > 128.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod arithmetic;
pub mod curves;
pub mod live;

pub use arithmetic::{
    add, add_hex, add_hsl, add_rgb, invert, invert_hex, invert_hsl, invert_rgb, multiply,
    multiply_rgb, sub, sub_rgb, Operand,
};
pub use curves::{
    brightness_curve, brightness_curve_rgb, color_curve, color_curve_rgb, contrast_curve,
    contrast_curve_rgb, ChannelStrength, CONTRAST_Y_MAX, DEFAULT_STRENGTH,
};
pub use live::LiveColor;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        add, brightness_curve, color_curve, contrast_curve, invert, multiply, sub,
        ChannelStrength, LiveColor, Operand,
    };
}

//! Variant-preserving color arithmetic.
//!
//! Every operator returns the kind of its left operand and constrains the
//! result into registry ranges. The left operand's alpha is kept.
//!
//! # Operands
//!
//! The right side is an [`Operand`]: another color or a scalar. A scalar
//! broadcasts to r, g and b. For `add` and `sub` a zero channel in the
//! operand means "no change". `multiply` by a color operand zeroes the
//! channels where the operand is 0; only a bare scalar 0 is a no-op.
//!
//! # Spaces
//!
//! The left operand picks the space; the right one is converted into it.
//!
//! ```text
//! add       HSL left, color operand -> summed in HSL, hue wraps mod 360
//!           RGB or HEX left         -> summed in RGB
//!           scalar operand          -> summed in RGB
//! sub       RGB left operand only, otherwise returned unchanged
//! multiply  RGB left operand only, otherwise returned unchanged
//! invert    RGB: max - channel; HSL/HEX pivot through RGB
//! ```

use tinct_color::{
    constrain_hsl, constrain_rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, to_hsl, to_rgb,
};
use tinct_core::{registry, Color, Hex, Hsl, Rgb};
use tracing::{debug, trace};

/// Right-hand side of an arithmetic operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Channel-wise operand in the color's own space.
    Color(Color),
    /// Same value for r, g and b.
    Scalar(f64),
}

impl From<Color> for Operand {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Rgb> for Operand {
    fn from(rgb: Rgb) -> Self {
        Self::Color(Color::Rgb(rgb))
    }
}

impl From<Hsl> for Operand {
    fn from(hsl: Hsl) -> Self {
        Self::Color(Color::Hsl(hsl))
    }
}

impl From<Hex> for Operand {
    fn from(hex: Hex) -> Self {
        Self::Color(Color::Hex(hex))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl Operand {
    /// The operand as RGB channels; a scalar becomes a gray.
    fn rgb(&self) -> Rgb {
        match self {
            Self::Color(color) => to_rgb(color),
            Self::Scalar(v) => Rgb::gray(*v),
        }
    }
}

fn zero_or_nan(r: f64) -> bool {
    r == 0.0 || !r.is_finite()
}

/// Converts an RGB result back into the kind of `like`.
pub(crate) fn rebuild(like: &Color, rgb: Rgb) -> Color {
    match like {
        Color::Rgb(_) => Color::Rgb(rgb),
        Color::Hsl(_) => Color::Hsl(rgb_to_hsl(&rgb)),
        Color::Hex(_) => Color::Hex(rgb_to_hex(&rgb)),
    }
}

/// Applies `op` to each channel pair, skipping channels where `skip`
/// holds for the operand.
fn zip_rgb(
    lhs: &Rgb,
    rhs: &Rgb,
    skip: impl Fn(f64) -> bool,
    op: impl Fn(f64, f64) -> f64,
) -> Rgb {
    let apply = |l: f64, r: f64| if skip(r) { l } else { op(l, r) };
    constrain_rgb(&Rgb::with_alpha(
        apply(lhs.r, rhs.r),
        apply(lhs.g, rhs.g),
        apply(lhs.b, rhs.b),
        lhs.a,
    ))
}

/// Channel-wise RGB sum, clamped.
pub fn add_rgb(lhs: &Rgb, rhs: &Rgb) -> Rgb {
    zip_rgb(lhs, rhs, zero_or_nan, |l, r| l + r)
}

/// Channel-wise HSL sum; hue wraps, saturation and lightness clamp.
///
/// ```rust
/// use tinct_core::Hsl;
/// use tinct_ops::add_hsl;
///
/// let h = add_hsl(&Hsl::new(350.0, 0.0, 0.0), &Hsl::new(20.0, 0.0, 0.0));
/// assert_eq!(h.h, 10.0);
/// ```
pub fn add_hsl(lhs: &Hsl, rhs: &Hsl) -> Hsl {
    let apply = |l: f64, r: f64| if r == 0.0 || !r.is_finite() { l } else { l + r };
    constrain_hsl(&Hsl::with_alpha(
        apply(lhs.h, rhs.h),
        apply(lhs.s, rhs.s),
        apply(lhs.l, rhs.l),
        lhs.a,
    ))
}

/// HEX sum, computed on the RGB values.
pub fn add_hex(lhs: &Hex, rhs: &Hex) -> Hex {
    rgb_to_hex(&add_rgb(&hex_to_rgb(lhs), &hex_to_rgb(rhs)))
}

/// Adds `rhs` to `lhs`, returning the kind of `lhs`.
///
/// An HSL `lhs` takes a color operand converted to HSL, so hue offsets
/// wrap. RGB and HEX sum in RGB, as does a scalar operand on any kind.
///
/// ```rust
/// use tinct_core::{Color, Hsl, Rgb};
/// use tinct_ops::{add, Operand};
///
/// // green reads as hsl(120, 100%, 50%) before it is added
/// let green = Operand::from(Rgb::new(0.0, 255.0, 0.0));
/// let c = add(&Color::Hsl(Hsl::new(0.0, 100.0, 50.0)), &green);
/// let hsl = c.as_hsl().unwrap();
/// assert!((hsl.h - 120.0).abs() < 1e-9);
/// assert_eq!((hsl.s, hsl.l), (100.0, 100.0));
/// ```
pub fn add(lhs: &Color, rhs: &Operand) -> Color {
    trace!(?lhs, ?rhs, "add");
    match (lhs, rhs) {
        (Color::Hsl(l), Operand::Color(r)) => Color::Hsl(add_hsl(l, &to_hsl(r))),
        (Color::Rgb(l), _) => Color::Rgb(add_rgb(l, &rhs.rgb())),
        _ => rebuild(lhs, add_rgb(&to_rgb(lhs), &rhs.rgb())),
    }
}

/// Channel-wise RGB difference, clamped.
pub fn sub_rgb(lhs: &Rgb, rhs: &Rgb) -> Rgb {
    zip_rgb(lhs, rhs, zero_or_nan, |l, r| l - r)
}

/// Subtracts `rhs` from an RGB `lhs`. Other kinds are returned unchanged.
pub fn sub(lhs: &Color, rhs: &Operand) -> Color {
    trace!(?lhs, ?rhs, "sub");
    match lhs {
        Color::Rgb(l) => Color::Rgb(sub_rgb(l, &rhs.rgb())),
        _ => {
            debug!(kind = %lhs.kind(), "sub ignored for non-RGB color");
            lhs.clone()
        }
    }
}

/// Channel-wise RGB product, clamped. A zero operand channel zeroes the
/// result channel.
pub fn multiply_rgb(lhs: &Rgb, rhs: &Rgb) -> Rgb {
    zip_rgb(lhs, rhs, |r| !r.is_finite(), |l, r| l * r)
}

/// Multiplies an RGB `lhs` by `rhs`. Other kinds are returned unchanged.
///
/// ```rust
/// use tinct_core::{Color, Rgb};
/// use tinct_ops::{multiply, Operand};
///
/// let c = multiply(&Color::Rgb(Rgb::new(100.0, 50.0, 10.0)), &Operand::Scalar(2.0));
/// assert_eq!(c, Color::Rgb(Rgb::new(200.0, 100.0, 20.0)));
/// ```
pub fn multiply(lhs: &Color, rhs: &Operand) -> Color {
    trace!(?lhs, ?rhs, "multiply");
    match lhs {
        Color::Rgb(_) if *rhs == Operand::Scalar(0.0) => lhs.clone(),
        Color::Rgb(l) => Color::Rgb(multiply_rgb(l, &rhs.rgb())),
        _ => {
            debug!(kind = %lhs.kind(), "multiply ignored for non-RGB color");
            lhs.clone()
        }
    }
}

/// `max - channel` for r, g and b; alpha kept.
pub fn invert_rgb(rgb: &Rgb) -> Rgb {
    let max = registry().rgb();
    constrain_rgb(&Rgb::with_alpha(max - rgb.r, max - rgb.g, max - rgb.b, rgb.a))
}

/// Inverts through RGB.
pub fn invert_hsl(hsl: &Hsl) -> Hsl {
    rgb_to_hsl(&invert_rgb(&hsl_to_rgb(hsl)))
}

/// Inverts through RGB.
pub fn invert_hex(hex: &Hex) -> Hex {
    rgb_to_hex(&invert_rgb(&hex_to_rgb(hex)))
}

/// Inverts any variant, keeping its kind.
pub fn invert(color: &Color) -> Color {
    trace!(?color, "invert");
    match color {
        Color::Rgb(rgb) => Color::Rgb(invert_rgb(rgb)),
        Color::Hsl(hsl) => Color::Hsl(invert_hsl(hsl)),
        Color::Hex(hex) => Color::Hex(invert_hex(hex)),
    }
}

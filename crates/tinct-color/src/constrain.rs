//! Constraining and rounding colors into registry ranges.
//!
//! [`constrain`] clamps every linear channel and wraps hue. It is
//! idempotent: constraining twice gives the same value as once.
//!
//! [`round`] rounds every channel to an integer, or with
//! `preserve_fraction` keeps the number of decimals given by
//! [`ChannelRange::precision`](tinct_core::ChannelRange::precision):
//! 3 digits for ranges up to 1, 2 up to 10, 1 up to 100, 0 above. That
//! keeps HSL and alpha stable but fractional for animation pipelines.

use tinct_core::{registry, Channel, Color, Hex, Hsl, Rgb};
use tinct_math::{clamp, euclidean_modulo, is_int, round_to};

use crate::convert::{hex_to_rgb, rgb_to_hex};

/// Clamps r, g, b and a into their ranges.
pub fn constrain_rgb(rgb: &Rgb) -> Rgb {
    let ranges = registry();
    Rgb::with_alpha(
        clamp(rgb.r, 0.0, ranges.rgb()),
        clamp(rgb.g, 0.0, ranges.rgb()),
        clamp(rgb.b, 0.0, ranges.rgb()),
        clamp(rgb.a, 0.0, ranges.alpha()),
    )
}

/// Wraps hue modulo its period; clamps s, l and a.
pub fn constrain_hsl(hsl: &Hsl) -> Hsl {
    let ranges = registry();
    Hsl::with_alpha(
        euclidean_modulo(hsl.h, ranges.hue()),
        clamp(hsl.s, 0.0, ranges.saturation()),
        clamp(hsl.l, 0.0, ranges.lightness()),
        clamp(hsl.a, 0.0, ranges.alpha()),
    )
}

/// Re-encodes through RGB, giving the canonical lowercase long form
/// (`#F0C` becomes `#ff00cc`, an opaque `ff` alpha byte is dropped).
pub fn constrain_hex(hex: &Hex) -> Hex {
    rgb_to_hex(&hex_to_rgb(hex))
}

/// Constrains any variant, keeping its kind.
///
/// ```rust
/// use tinct_core::{Color, Hsl};
/// use tinct_color::constrain;
///
/// let c = constrain(&Color::Hsl(Hsl::new(-30.0, 120.0, 50.0)));
/// assert_eq!(c, Color::Hsl(Hsl::new(330.0, 100.0, 50.0)));
/// ```
pub fn constrain(color: &Color) -> Color {
    match color {
        Color::Rgb(rgb) => Color::Rgb(constrain_rgb(rgb)),
        Color::Hsl(hsl) => Color::Hsl(constrain_hsl(hsl)),
        Color::Hex(hex) => Color::Hex(constrain_hex(hex)),
    }
}

/// Builds an RGB value, optionally constrained on construction. A missing
/// alpha means fully opaque.
///
/// ```rust
/// use tinct_core::Rgb;
/// use tinct_color::rgb;
///
/// assert_eq!(rgb(300.0, 10.0, -1.0, None, true), Rgb::new(255.0, 10.0, 0.0));
/// assert_eq!(rgb(300.0, 10.0, -1.0, Some(50.0), false).r, 300.0);
/// ```
pub fn rgb(r: f64, g: f64, b: f64, a: Option<f64>, constrain: bool) -> Rgb {
    let value = match a {
        Some(a) => Rgb::with_alpha(r, g, b, a),
        None => Rgb::new(r, g, b),
    };
    if constrain { constrain_rgb(&value) } else { value }
}

/// Builds an HSL value, optionally constrained on construction. A missing
/// alpha means fully opaque.
pub fn hsl(h: f64, s: f64, l: f64, a: Option<f64>, constrain: bool) -> Hsl {
    let value = match a {
        Some(a) => Hsl::with_alpha(h, s, l, a),
        None => Hsl::new(h, s, l),
    };
    if constrain { constrain_hsl(&value) } else { value }
}

fn round_channel(value: f64, channel: Channel, preserve_fraction: bool) -> f64 {
    if is_int(value) || !value.is_finite() {
        return value;
    }
    let digits = if preserve_fraction {
        registry().range(channel).precision()
    } else {
        0
    };
    round_to(value, digits)
}

/// Rounds r, g, b and a.
pub fn round_rgb(rgb: &Rgb, preserve_fraction: bool) -> Rgb {
    Rgb::with_alpha(
        round_channel(rgb.r, Channel::R, preserve_fraction),
        round_channel(rgb.g, Channel::G, preserve_fraction),
        round_channel(rgb.b, Channel::B, preserve_fraction),
        round_channel(rgb.a, Channel::A, preserve_fraction),
    )
}

/// Rounds h, s, l and a.
///
/// A hue inside `[0, 360)` that rounds up to 360 becomes 0.
pub fn round_hsl(hsl: &Hsl, preserve_fraction: bool) -> Hsl {
    let period = registry().hue();
    let mut h = round_channel(hsl.h, Channel::H, preserve_fraction);
    if h == period && hsl.h < period {
        h = 0.0;
    }
    Hsl::with_alpha(
        h,
        round_channel(hsl.s, Channel::S, preserve_fraction),
        round_channel(hsl.l, Channel::L, preserve_fraction),
        round_channel(hsl.a, Channel::A, preserve_fraction),
    )
}

/// Rounds any variant, keeping its kind. Hex is already byte-quantized and
/// is canonicalized with [`constrain_hex`].
pub fn round(color: &Color, preserve_fraction: bool) -> Color {
    match color {
        Color::Rgb(rgb) => Color::Rgb(round_rgb(rgb, preserve_fraction)),
        Color::Hsl(hsl) => Color::Hsl(round_hsl(hsl, preserve_fraction)),
        Color::Hex(hex) => Color::Hex(constrain_hex(hex)),
    }
}

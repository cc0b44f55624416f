//! CSS string rendering.
//!
//! ```text
//! rgb(255, 0, 0)             opaque RGB
//! rgba(255, 0, 0, 0.5)        translucent RGB
//! hsl(120, 100%, 50%)         opaque HSL
//! hsla(120, 100%, 50%, 0.5)
//! #ff0000                     hex, verbatim
//! ```
//!
//! Channels are rounded to integers here and nowhere earlier. Alpha is
//! printed normalized to `[0, 1]` whatever the registry alpha scale is;
//! the `a` forms are used exactly when that normalized alpha is not 1.

use tinct_core::{registry, Channel, Color, Hsl, Rgb};
use tinct_math::round_to;

/// Alpha as printed in CSS, divided by the alpha maximum.
///
/// On an integer alpha scale the value is rounded to an integer first, like
/// every other channel. On a unit scale it keeps three digits.
pub fn css_alpha(a: f64) -> f64 {
    let max = registry().range(Channel::A).max;
    let a = if max > 1.0 { round_to(a, 0) } else { round_to(a, 3) };
    round_to(a / max, 3)
}

fn int(v: f64) -> f64 {
    round_to(v, 0)
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// ```rust
/// use tinct_core::Rgb;
/// use tinct_color::rgb_to_string;
///
/// assert_eq!(rgb_to_string(&Rgb::new(254.6, 0.2, 10.0)), "rgb(255, 0, 10)");
/// assert_eq!(rgb_to_string(&Rgb::with_alpha(0.0, 0.0, 0.0, 50.0)), "rgba(0, 0, 0, 0.5)");
/// ```
pub fn rgb_to_string(rgb: &Rgb) -> String {
    let (r, g, b) = (int(rgb.r), int(rgb.g), int(rgb.b));
    let a = css_alpha(rgb.a);
    if a != 1.0 {
        format!("rgba({r}, {g}, {b}, {a})")
    } else {
        format!("rgb({r}, {g}, {b})")
    }
}

/// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
///
/// A hue just below the period that rounds up to it prints as 0.
///
/// ```rust
/// use tinct_core::Hsl;
/// use tinct_color::hsl_to_string;
///
/// assert_eq!(hsl_to_string(&Hsl::new(120.0, 100.0, 50.0)), "hsl(120, 100%, 50%)");
/// ```
pub fn hsl_to_string(hsl: &Hsl) -> String {
    let period = registry().hue();
    let h = match int(hsl.h) {
        h if h == period && hsl.h < period => 0.0,
        h => h,
    };
    let (s, l) = (int(hsl.s), int(hsl.l));
    let a = css_alpha(hsl.a);
    if a != 1.0 {
        format!("hsla({h}, {s}%, {l}%, {a})")
    } else {
        format!("hsl({h}, {s}%, {l}%)")
    }
}

/// Renders any variant; hex text is returned as written.
pub fn to_string(color: &Color) -> String {
    match color {
        Color::Rgb(rgb) => rgb_to_string(rgb),
        Color::Hsl(hsl) => hsl_to_string(hsl),
        Color::Hex(hex) => hex.as_str().to_string(),
    }
}

//! Tone curves.
//!
//! Each curve normalizes r, g and b to `[0, 1]`, adds a shaped increment
//! and maps back to `[0, RGB_MAX]` with clamping. The shapes are zero at
//! both ends, so black and white stay fixed. Alpha is untouched and the
//! result has the kind of the input.
//!
//! ```text
//! contrast    inc = bezier(x; 0, -3.465, 3.465, 0) * k    S-curve, midpoint fixed
//! color       inc = 4x(1-x) * k_channel                   lifts or lowers midtones
//! brightness  color curve with k_r = k_g = k_b
//! ```

use tinct_color::{normalize_rgb, to_rgb};
use tinct_core::{registry, Color, Rgb};
use tinct_math::{cubic_bezier, map, parabola};
use tracing::trace;

use crate::arithmetic::rebuild;

/// Default strength of a single curve step.
pub const DEFAULT_STRENGTH: f64 = 0.01;

/// Height of the contrast Bezier control points.
pub const CONTRAST_Y_MAX: f64 = 3.465;

/// Per-channel strengths for [`color_curve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStrength {
    /// Red strength.
    pub r: f64,
    /// Green strength.
    pub g: f64,
    /// Blue strength.
    pub b: f64,
}

impl ChannelStrength {
    /// Separate strengths.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Same strength on every channel.
    pub fn uniform(strength: f64) -> Self {
        Self::new(strength, strength, strength)
    }
}

impl Default for ChannelStrength {
    fn default() -> Self {
        Self::uniform(DEFAULT_STRENGTH)
    }
}

/// Runs `inc(x, channel_index)` on normalized channels.
fn apply_curve(rgb: &Rgb, inc: impl Fn(f64, usize) -> f64) -> Rgb {
    let max = registry().rgb();
    let n = normalize_rgb(rgb);
    let out = |x: f64, i: usize| map(x + inc(x, i), 0.0, 1.0, 0.0, max, true);
    Rgb::with_alpha(out(n.r, 0), out(n.g, 1), out(n.b, 2), rgb.a)
}

/// Contrast S-curve on RGB.
pub fn contrast_curve_rgb(rgb: &Rgb, strength: f64) -> Rgb {
    apply_curve(rgb, |x, _| {
        cubic_bezier(x, 0.0, -CONTRAST_Y_MAX, CONTRAST_Y_MAX, 0.0) * strength
    })
}

/// Per-channel parabola curve on RGB.
pub fn color_curve_rgb(rgb: &Rgb, strength: ChannelStrength) -> Rgb {
    let k = [strength.r, strength.g, strength.b];
    apply_curve(rgb, |x, i| parabola(x) * k[i])
}

/// [`color_curve_rgb`] with one strength for all channels.
pub fn brightness_curve_rgb(rgb: &Rgb, strength: f64) -> Rgb {
    color_curve_rgb(rgb, ChannelStrength::uniform(strength))
}

/// Pushes midtones toward the extremes (negative strength flattens).
///
/// ```rust
/// use tinct_core::{Color, Rgb};
/// use tinct_ops::{contrast_curve, DEFAULT_STRENGTH};
///
/// let black = Color::Rgb(Rgb::new(0.0, 0.0, 0.0));
/// assert_eq!(contrast_curve(&black, DEFAULT_STRENGTH), black);
/// ```
pub fn contrast_curve(color: &Color, strength: f64) -> Color {
    trace!(?color, strength, "contrast curve");
    rebuild(color, contrast_curve_rgb(&to_rgb(color), strength))
}

/// Biases midtones per channel, for tinting.
pub fn color_curve(color: &Color, strength: ChannelStrength) -> Color {
    trace!(?color, ?strength, "color curve");
    rebuild(color, color_curve_rgb(&to_rgb(color), strength))
}

/// Lifts (positive) or lowers (negative) midtones equally.
pub fn brightness_curve(color: &Color, strength: f64) -> Color {
    color_curve(color, ChannelStrength::uniform(strength))
}

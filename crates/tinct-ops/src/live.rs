//! Mutable color for interactive consumers.
//!
//! [`LiveColor`] owns one canonical RGB value plus a display mode. HSL and
//! HEX are views computed on read; nothing is cached, so a setter can
//! never leave a stale view behind. Every mutation clamps into registry
//! ranges.
//!
//! A `LiveColor` belongs to one logical caller at a time (e.g. one UI
//! control). Mutation takes `&mut self`; share it across threads only
//! behind your own lock.
//!
//! ```rust
//! use tinct_core::{Color, ColorKind, Hsl};
//! use tinct_ops::LiveColor;
//!
//! let mut live = LiveColor::new(&Color::Hsl(Hsl::new(0.0, 100.0, 50.0)));
//! assert_eq!(live.to_string(), "hsl(0, 100%, 50%)");
//!
//! live.set_mode(ColorKind::Hex);
//! live.set_g(255.0);
//! assert_eq!(live.to_string(), "#ffff00");
//! ```

use std::fmt;

use tinct_color::{
    constrain_rgb, hsl_to_rgb, random_rgb, rgb_to_hex, rgb_to_hsl, to_rgb, to_string,
};
use tinct_core::{registry, Color, ColorKind, Hex, Hsl, Rgb};
use tinct_math::clamp;

use crate::arithmetic::{add, invert_rgb, multiply, sub, Operand};
use crate::curves::{brightness_curve_rgb, color_curve_rgb, contrast_curve_rgb, ChannelStrength};

/// Mutable RGB color with a display mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LiveColor {
    rgb: Rgb,
    mode: ColorKind,
}

impl LiveColor {
    /// Wraps `color`, displaying in its own kind.
    pub fn new(color: &Color) -> Self {
        Self::with_mode(color, color.kind())
    }

    /// Wraps `color`, displaying in `mode`.
    pub fn with_mode(color: &Color, mode: ColorKind) -> Self {
        Self {
            rgb: constrain_rgb(&to_rgb(color)),
            mode,
        }
    }

    /// Random opaque color in RGB mode.
    pub fn random() -> Self {
        Self::from(random_rgb(None))
    }

    /// Red channel.
    pub fn r(&self) -> f64 {
        self.rgb.r
    }

    /// Green channel.
    pub fn g(&self) -> f64 {
        self.rgb.g
    }

    /// Blue channel.
    pub fn b(&self) -> f64 {
        self.rgb.b
    }

    /// Alpha.
    pub fn a(&self) -> f64 {
        self.rgb.a
    }

    /// Sets red, clamped. Non-finite values are ignored.
    pub fn set_r(&mut self, r: f64) {
        if r.is_finite() {
            self.rgb.r = clamp(r, 0.0, registry().rgb());
        }
    }

    /// Sets green, clamped. Non-finite values are ignored.
    pub fn set_g(&mut self, g: f64) {
        if g.is_finite() {
            self.rgb.g = clamp(g, 0.0, registry().rgb());
        }
    }

    /// Sets blue, clamped. Non-finite values are ignored.
    pub fn set_b(&mut self, b: f64) {
        if b.is_finite() {
            self.rgb.b = clamp(b, 0.0, registry().rgb());
        }
    }

    /// Sets alpha, clamped. Non-finite values are ignored.
    pub fn set_a(&mut self, a: f64) {
        if a.is_finite() {
            self.rgb.a = clamp(a, 0.0, registry().alpha());
        }
    }

    /// Display mode.
    pub fn mode(&self) -> ColorKind {
        self.mode
    }

    /// Changes the display mode; the value is unchanged.
    pub fn set_mode(&mut self, mode: ColorKind) {
        self.mode = mode;
    }

    /// Current value as RGB.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Current value as HSL.
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(&self.rgb)
    }

    /// Current value as HEX.
    pub fn hex(&self) -> Hex {
        rgb_to_hex(&self.rgb)
    }

    /// Current value in the display mode.
    pub fn color(&self) -> Color {
        self.color_in(self.mode)
    }

    /// Current value in `kind`.
    pub fn color_in(&self, kind: ColorKind) -> Color {
        match kind {
            ColorKind::Rgb => Color::Rgb(self.rgb),
            ColorKind::Hsl => Color::Hsl(self.hsl()),
            ColorKind::Hex => Color::Hex(self.hex()),
        }
    }

    /// Replaces the value; the mode is kept.
    pub fn set(&mut self, color: &Color) {
        self.set_rgb(&to_rgb(color));
    }

    /// Replaces the value from RGB, clamping every channel.
    pub fn set_rgb(&mut self, rgb: &Rgb) {
        self.set_r(rgb.r);
        self.set_g(rgb.g);
        self.set_b(rgb.b);
        self.set_a(rgb.a);
    }

    /// Replaces the value from HSL.
    pub fn set_hsl(&mut self, hsl: &Hsl) {
        self.set_rgb(&hsl_to_rgb(hsl));
    }

    /// Sets r, g and b to `v`; alpha is kept.
    pub fn set_gray(&mut self, v: f64) {
        self.set_r(v);
        self.set_g(v);
        self.set_b(v);
    }

    /// Sets from a channel slice, see [`Rgb::from_slice`]. An empty slice
    /// is ignored.
    pub fn set_slice(&mut self, values: &[f64]) {
        if !values.is_empty() {
            self.set_rgb(&Rgb::from_slice(values));
        }
    }

    /// Inverts in place.
    pub fn invert(&mut self) {
        self.rgb = invert_rgb(&self.rgb);
    }

    /// Inverted copy; `self` is unchanged.
    pub fn inverted(&self) -> Self {
        let mut copy = *self;
        copy.invert();
        copy
    }

    /// Adds in place.
    ///
    /// In HSL mode a color operand is read as HSL and shifts hue,
    /// saturation and lightness; otherwise the sum is taken in RGB.
    pub fn add(&mut self, operand: impl Into<Operand>) {
        let lhs = match self.mode {
            ColorKind::Hsl => Color::Hsl(self.hsl()),
            _ => Color::Rgb(self.rgb),
        };
        self.rgb = to_rgb(&add(&lhs, &operand.into()));
    }

    /// Subtracts in place.
    pub fn sub(&mut self, operand: impl Into<Operand>) {
        self.apply(|c| sub(c, &operand.into()));
    }

    /// Multiplies in place.
    pub fn multiply(&mut self, operand: impl Into<Operand>) {
        self.apply(|c| multiply(c, &operand.into()));
    }

    /// Contrast curve in place.
    pub fn contrast_curve(&mut self, strength: f64) {
        self.rgb = contrast_curve_rgb(&self.rgb, strength);
    }

    /// Per-channel color curve in place.
    pub fn color_curve(&mut self, strength: ChannelStrength) {
        self.rgb = color_curve_rgb(&self.rgb, strength);
    }

    /// Brightness curve in place.
    pub fn brightness_curve(&mut self, strength: f64) {
        self.rgb = brightness_curve_rgb(&self.rgb, strength);
    }

    fn apply(&mut self, op: impl FnOnce(&Color) -> Color) {
        self.rgb = to_rgb(&op(&Color::Rgb(self.rgb)));
    }

    /// Formats in `kind` regardless of the display mode.
    pub fn to_string_in(&self, kind: ColorKind) -> String {
        to_string(&self.color_in(kind))
    }
}

impl From<Rgb> for LiveColor {
    fn from(rgb: Rgb) -> Self {
        Self::new(&Color::Rgb(rgb))
    }
}

impl From<Color> for LiveColor {
    fn from(color: Color) -> Self {
        Self::new(&color)
    }
}

impl fmt::Display for LiveColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_in(self.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constructs_constrained() {
        let live = LiveColor::from(Rgb::with_alpha(300.0, -4.0, 12.0, 250.0));
        assert_eq!(live.rgb(), Rgb::with_alpha(255.0, 0.0, 12.0, 100.0));
        assert_eq!(live.mode(), ColorKind::Rgb);
    }

    #[test]
    fn setters_clamp_and_ignore_nan() {
        let mut live = LiveColor::default();
        live.set_r(1000.0);
        live.set_g(-1.0);
        live.set_b(f64::NAN);
        live.set_a(50.0);
        assert_eq!(live.rgb(), Rgb::with_alpha(255.0, 0.0, 0.0, 50.0));
    }

    #[test]
    fn views_follow_setters() {
        let mut live = LiveColor::default();
        live.set_hsl(&Hsl::new(240.0, 100.0, 50.0));
        assert_eq!(live.hex().as_str(), "#0000ff");
        live.set_r(255.0);
        assert_abs_diff_eq!(live.hsl().h, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn display_by_mode() {
        let mut live = LiveColor::from(Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(live.to_string(), "rgb(255, 0, 0)");
        live.set_mode(ColorKind::Hsl);
        assert_eq!(live.to_string(), "hsl(0, 100%, 50%)");
        assert_eq!(live.to_string_in(ColorKind::Hex), "#ff0000");
    }

    #[test]
    fn set_gray_and_slice() {
        let mut live = LiveColor::default();
        live.set_a(20.0);
        live.set_gray(42.0);
        assert_eq!(live.rgb(), Rgb::with_alpha(42.0, 42.0, 42.0, 20.0));
        live.set_slice(&[1.0, 2.0, 3.0, 40.0]);
        assert_eq!(live.rgb(), Rgb::with_alpha(1.0, 2.0, 3.0, 40.0));
        live.set_slice(&[]);
        assert_eq!(live.rgb(), Rgb::with_alpha(1.0, 2.0, 3.0, 40.0));
    }

    #[test]
    fn in_place_ops() {
        let mut live = LiveColor::from(Rgb::new(100.0, 100.0, 100.0));
        live.add(10.0);
        live.sub(Rgb::new(0.0, 20.0, 0.0));
        live.multiply(2.0);
        assert_eq!(live.rgb(), Rgb::new(220.0, 180.0, 220.0));

        // in RGB mode the HSL operand reads as black
        let mut red = LiveColor::from(Rgb::new(255.0, 0.0, 0.0));
        red.add(Hsl::new(240.0, 0.0, 0.0));
        assert_eq!(red.rgb(), Rgb::new(255.0, 0.0, 0.0));

        red.set_mode(ColorKind::Hsl);
        red.add(Hsl::new(240.0, 0.0, 0.0));
        assert_abs_diff_eq!(red.b(), 255.0, epsilon = 1e-9);
        assert_abs_diff_eq!(red.r(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn inverted_leaves_original() {
        let live = LiveColor::from(Rgb::new(0.0, 100.0, 255.0));
        let inv = live.inverted();
        assert_eq!(inv.rgb(), Rgb::new(255.0, 155.0, 0.0));
        assert_eq!(live.rgb(), Rgb::new(0.0, 100.0, 255.0));
    }

    #[test]
    fn curves_in_place() {
        let mut live = LiveColor::from(Rgb::gray(127.5));
        live.brightness_curve(0.1);
        assert_abs_diff_eq!(live.r(), 0.6 * 255.0, epsilon = 1e-9);
        live.contrast_curve(0.0);
        assert_abs_diff_eq!(live.r(), 0.6 * 255.0, epsilon = 1e-9);
        live.color_curve(ChannelStrength::new(0.0, 0.0, -1.0));
        assert!(live.b() < live.g());
    }
}

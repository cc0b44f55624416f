//! Conversion between RGB, HSL and HEX.
//!
//! RGB is the pivot: HSL and HEX never convert into each other directly,
//! every such path goes HSL -> RGB -> HEX or HEX -> RGB -> HSL so the
//! math lives in exactly two places ([`rgb_to_hsl`] and [`hsl_to_rgb`]).
//!
//! # Hue sectors
//!
//! HSL -> RGB splits the hue circle into six half-open 60 degree sectors.
//! The sector decides which channel receives the chroma `c`, which the
//! secondary `x` and which zero:
//!
//! ```text
//! sector  hue         r  g  b
//!   0     [0, 60)     c  x  0
//!   1     [60, 120)   x  c  0
//!   2     [120, 180)  0  c  x
//!   3     [180, 240)  0  x  c
//!   4     [240, 300)  x  0  c
//!   5     [300, 360)  c  0  x
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{Hex, Hsl, Rgb};
//! use tinct_color::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
//!
//! assert_eq!(rgb_to_hsl(&Rgb::new(255.0, 0.0, 0.0)), Hsl::new(0.0, 100.0, 50.0));
//! assert_eq!(hsl_to_rgb(&Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0.0, 255.0, 0.0));
//! assert_eq!(rgb_to_hex(&Rgb::new(255.0, 0.0, 0.0)).as_str(), "#ff0000");
//! assert_eq!(hex_to_rgb(&Hex::parse("#00f").unwrap()), Rgb::new(0.0, 0.0, 255.0));
//! ```

use tinct_core::{registry, Color, Hex, Hsl, Rgb};
use tinct_math::{clamp, euclidean_modulo, map, saturate, segment};
use tracing::{debug, trace};

/// RGB -> HSL.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0.
/// When several channels share the maximum, the first of R, G, B wins.
/// Alpha passes through unchanged.
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let ranges = registry();
    let max = ranges.rgb();
    let r = map(rgb.r, 0.0, max, 0.0, 1.0, true);
    let g = map(rgb.g, 0.0, max, 0.0, 1.0, true);
    let b = map(rgb.b, 0.0, max, 0.0, 1.0, true);

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    // hue in sixths of a turn
    let sixths = if delta == 0.0 {
        0.0
    } else if cmax == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if cmax == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let h = euclidean_modulo(sixths / 6.0, 1.0);
    let l = saturate((cmax + cmin) / 2.0);
    let s = if delta == 0.0 {
        0.0
    } else {
        saturate(delta / (1.0 - (2.0 * l - 1.0).abs()))
    };

    Hsl::with_alpha(
        h * ranges.hue(),
        s * ranges.saturation(),
        l * ranges.lightness(),
        rgb.a,
    )
}

/// HSL -> RGB.
///
/// Hue is wrapped into `[0, 360)` first; saturation and lightness are
/// normalized to `[0, 1]`. Output channels are clamped to `[0, rgb_max]`.
/// Alpha passes through unchanged.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let ranges = registry();
    let h = euclidean_modulo(hsl.h, ranges.hue());
    let s = saturate(hsl.s / ranges.saturation());
    let l = saturate(hsl.l / ranges.lightness());

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector_width = ranges.hue() / 6.0;
    let x = if h == 0.0 {
        0.0
    } else {
        c * (1.0 - ((h / sector_width) % 2.0 - 1.0).abs())
    };
    let m = l - c / 2.0;

    let (r, g, b) = match segment(h, 6, 0.0, ranges.hue()) {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let max = ranges.rgb();
    Rgb::with_alpha(
        map(r + m, 0.0, 1.0, 0.0, max, true),
        map(g + m, 0.0, 1.0, 0.0, max, true),
        map(b + m, 0.0, 1.0, 0.0, max, true),
        hsl.a,
    )
}

/// RGB -> HEX.
///
/// Channels are clamped, scaled from `[0, rgb_max]` to `[0, 255]` and
/// rounded to bytes. The alpha byte is appended only when the color is not
/// fully opaque; it encodes `a / alpha_max` scaled to 255.
pub fn rgb_to_hex(rgb: &Rgb) -> Hex {
    let ranges = registry();
    let max = ranges.rgb();
    let byte = |v: f64| (clamp(v, 0.0, max) * 255.0 / max).round() as u8;
    let a = clamp(rgb.a, 0.0, ranges.alpha());
    let alpha = (a != ranges.alpha()).then(|| (a / ranges.alpha() * 255.0).round() as u8);
    Hex::from_bytes(byte(rgb.r), byte(rgb.g), byte(rgb.b), alpha)
}

/// HEX -> RGB.
///
/// Short forms expand by nibble duplication. Color bytes are scaled into
/// `[0, rgb_max]`. A missing alpha byte means fully opaque; a present one
/// is scaled into the registry alpha range.
pub fn hex_to_rgb(hex: &Hex) -> Rgb {
    let ranges = registry();
    let ([r, g, b], alpha) = hex.bytes();
    let channel = |byte: u8| byte as f64 * ranges.rgb() / 255.0;
    let a = match alpha {
        Some(byte) => byte as f64 / 255.0 * ranges.alpha(),
        None => ranges.alpha(),
    };
    Rgb::with_alpha(channel(r), channel(g), channel(b), a)
}

/// HEX text -> RGB without validation up front.
///
/// Malformed text yields opaque black.
pub fn hex_str_to_rgb(text: &str) -> Rgb {
    match Hex::parse(text) {
        Ok(hex) => hex_to_rgb(&hex),
        Err(err) => {
            debug!(%err, "falling back to default RGB");
            Rgb::default()
        }
    }
}

/// HSL -> HEX, through RGB.
pub fn hsl_to_hex(hsl: &Hsl) -> Hex {
    rgb_to_hex(&hsl_to_rgb(hsl))
}

/// HEX -> HSL, through RGB.
pub fn hex_to_hsl(hex: &Hex) -> Hsl {
    rgb_to_hsl(&hex_to_rgb(hex))
}

/// Any color -> RGB.
pub fn to_rgb(color: &Color) -> Rgb {
    trace!(kind = %color.kind(), "to RGB");
    match color {
        Color::Rgb(rgb) => *rgb,
        Color::Hsl(hsl) => hsl_to_rgb(hsl),
        Color::Hex(hex) => hex_to_rgb(hex),
    }
}

/// Any color -> HSL.
pub fn to_hsl(color: &Color) -> Hsl {
    trace!(kind = %color.kind(), "to HSL");
    match color {
        Color::Rgb(rgb) => rgb_to_hsl(rgb),
        Color::Hsl(hsl) => *hsl,
        Color::Hex(hex) => hex_to_hsl(hex),
    }
}

/// Any color -> HEX. Hex input is returned as written.
pub fn to_hex(color: &Color) -> Hex {
    trace!(kind = %color.kind(), "to HEX");
    match color {
        Color::Rgb(rgb) => rgb_to_hex(rgb),
        Color::Hsl(hsl) => hsl_to_hex(hsl),
        Color::Hex(hex) => hex.clone(),
    }
}

/// Maps every channel, alpha included, from its registry range into
/// `[low, high]`, clamping.
pub fn map_rgb(rgb: &Rgb, low: f64, high: f64) -> Rgb {
    let ranges = registry();
    let m = |v: f64, max: f64| map(v, 0.0, max, low, high, true);
    Rgb::with_alpha(
        m(rgb.r, ranges.rgb()),
        m(rgb.g, ranges.rgb()),
        m(rgb.b, ranges.rgb()),
        m(rgb.a, ranges.alpha()),
    )
}

/// Channels scaled to `[0, 1]`.
pub fn normalize_rgb(rgb: &Rgb) -> Rgb {
    map_rgb(rgb, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_hsl(actual: Hsl, h: f64, s: f64, l: f64) {
        assert_abs_diff_eq!(actual.h, h, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.s, s, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.l, l, epsilon = 1e-9);
    }

    #[test]
    fn primaries_to_hsl() {
        assert_hsl(rgb_to_hsl(&Rgb::new(255.0, 0.0, 0.0)), 0.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(&Rgb::new(0.0, 255.0, 0.0)), 120.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(&Rgb::new(0.0, 0.0, 255.0)), 240.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(&Rgb::new(255.0, 255.0, 0.0)), 60.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(&Rgb::new(255.0, 0.0, 255.0)), 300.0, 100.0, 50.0);
    }

    #[test]
    fn achromatic_has_no_hue_or_saturation() {
        for v in [0.0, 1.0, 128.0, 254.0, 255.0] {
            let hsl = rgb_to_hsl(&Rgb::gray(v));
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert_abs_diff_eq!(hsl.l, v / 255.0 * 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn red_max_with_negative_hue_wraps() {
        // r is max and b > g: hue lands just below 360
        let hsl = rgb_to_hsl(&Rgb::new(255.0, 0.0, 51.0));
        assert_abs_diff_eq!(hsl.h, 348.0, epsilon = 1e-9);
    }

    #[test]
    fn out_of_range_rgb_is_clamped_on_input() {
        let hsl = rgb_to_hsl(&Rgb::new(400.0, -20.0, 0.0));
        assert_hsl(hsl, 0.0, 100.0, 50.0);
    }

    #[test]
    fn alpha_passes_through() {
        let hsl = rgb_to_hsl(&Rgb::with_alpha(10.0, 20.0, 30.0, 42.0));
        assert_eq!(hsl.a, 42.0);
        let rgb = hsl_to_rgb(&Hsl::with_alpha(10.0, 20.0, 30.0, 7.0));
        assert_eq!(rgb.a, 7.0);
    }

    #[test]
    fn hsl_sectors() {
        let cases = [
            (0.0, [255.0, 0.0, 0.0]),
            (60.0, [255.0, 255.0, 0.0]),
            (120.0, [0.0, 255.0, 0.0]),
            (180.0, [0.0, 255.0, 255.0]),
            (240.0, [0.0, 0.0, 255.0]),
            (300.0, [255.0, 0.0, 255.0]),
            (360.0, [255.0, 0.0, 0.0]),
            (-60.0, [255.0, 0.0, 255.0]),
            (30.0, [255.0, 127.5, 0.0]),
        ];
        for (h, expected) in cases {
            let rgb = hsl_to_rgb(&Hsl::new(h, 100.0, 50.0));
            for (got, want) in rgb.channels().iter().zip(expected) {
                assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn hsl_extremes() {
        assert_eq!(hsl_to_rgb(&Hsl::new(200.0, 100.0, 0.0)).channels(), [0.0; 3]);
        assert_eq!(hsl_to_rgb(&Hsl::new(200.0, 100.0, 100.0)).channels(), [255.0; 3]);
        assert_eq!(hsl_to_rgb(&Hsl::new(200.0, 0.0, 50.0)).channels(), [127.5; 3]);
    }

    #[test]
    fn roundtrip_within_one() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let rgb = Rgb::new(r as f64, g as f64, b as f64);
                    let back = hsl_to_rgb(&rgb_to_hsl(&rgb));
                    for (got, want) in back.channels().iter().zip(rgb.channels()) {
                        assert!((got.round() - want).abs() <= 1.0, "{rgb:?} -> {back:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn hex_encode() {
        assert_eq!(rgb_to_hex(&Rgb::new(255.0, 0.0, 0.0)).as_str(), "#ff0000");
        assert_eq!(rgb_to_hex(&Rgb::new(0.4, 15.6, 300.0)).as_str(), "#0010ff");
        assert_eq!(
            rgb_to_hex(&Rgb::with_alpha(0.0, 0.0, 0.0, 50.0)).as_str(),
            "#00000080"
        );
        assert_eq!(
            rgb_to_hex(&Rgb::with_alpha(0.0, 0.0, 0.0, 0.0)).as_str(),
            "#00000000"
        );
    }

    #[test]
    fn hex_decode() {
        let hex = |s: &str| Hex::parse(s).unwrap();
        assert_eq!(hex_to_rgb(&hex("#00f")), Rgb::new(0.0, 0.0, 255.0));
        assert_eq!(hex_to_rgb(&hex("#f0c")), Rgb::new(255.0, 0.0, 204.0));
        assert_eq!(hex_to_rgb(&hex("#FF8000")), Rgb::new(255.0, 128.0, 0.0));
        let with_alpha = hex_to_rgb(&hex("#ff000000"));
        assert_eq!(with_alpha.a, 0.0);
        let half = hex_to_rgb(&hex("#0008"));
        assert_abs_diff_eq!(half.a, 136.0 / 255.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn hex_str_fallback() {
        assert_eq!(hex_str_to_rgb("#0f0"), Rgb::new(0.0, 255.0, 0.0));
        assert_eq!(hex_str_to_rgb("green"), Rgb::default());
        assert_eq!(hex_str_to_rgb("#12345"), Rgb::default());
    }

    #[test]
    fn pivot_paths() {
        let hsl = Hsl::new(120.0, 100.0, 50.0);
        assert_eq!(hsl_to_hex(&hsl).as_str(), "#00ff00");
        let back = hex_to_hsl(&hsl_to_hex(&hsl));
        assert_hsl(back, 120.0, 100.0, 50.0);
    }

    #[test]
    fn dispatch() {
        let hex = Color::Hex(Hex::parse("#F00").unwrap());
        assert_eq!(to_rgb(&hex), Rgb::new(255.0, 0.0, 0.0));
        assert_hsl(to_hsl(&hex), 0.0, 100.0, 50.0);
        assert_eq!(to_hex(&hex).as_str(), "#F00");

        let hsl = Color::Hsl(Hsl::new(240.0, 100.0, 50.0));
        assert_eq!(to_hex(&hsl).as_str(), "#0000ff");
        assert_eq!(to_hsl(&hsl), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn normalize_channels() {
        let n = normalize_rgb(&Rgb::with_alpha(255.0, 0.0, 510.0, 50.0));
        assert_eq!(n, Rgb::with_alpha(1.0, 0.0, 1.0, 0.5));
        let m = map_rgb(&Rgb::new(127.5, 0.0, 255.0), 0.0, 10.0);
        assert_eq!(m, Rgb::with_alpha(5.0, 0.0, 10.0, 10.0));
    }
}

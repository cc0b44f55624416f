//! Range mapping, clamping and rounding utilities.
//!
//! These are the building blocks every channel operation in tinct goes
//! through:
//!
//! - Linear interpolation ([`lerp`], [`inverse_lerp`])
//! - Mapping between ranges ([`map`], [`normalize`])
//! - Clamping ([`clamp`], [`saturate`])
//! - Circular wrap for hue ([`euclidean_modulo`], [`segment`])
//! - Decimal rounding ([`round_to`])
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{lerp, normalize, round_to};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(normalize(50.0, 0.0, 100.0), 0.5);
//! assert_eq!(round_to(1.23456, 2), 1.23);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// A degenerate range (`a == b`) yields 0.
///
/// # Example
///
/// ```rust
/// use tinct_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// ```
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-12 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Maps a value from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// With `constrain` set, the result is clamped to the output range
/// (whichever bound is lower acts as the minimum).
///
/// # Example
///
/// ```rust
/// use tinct_math::map;
///
/// assert_eq!(map(0.5, 0.0, 1.0, 0.0, 100.0, false), 50.0);
/// assert_eq!(map(1.5, 0.0, 1.0, 0.0, 100.0, true), 100.0);
/// ```
#[inline]
pub fn map(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    constrain: bool,
) -> f64 {
    let mapped = lerp(out_min, out_max, inverse_lerp(in_min, in_max, value));
    if constrain {
        clamp(mapped, out_min.min(out_max), out_min.max(out_max))
    } else {
        mapped
    }
}

/// Normalizes a value from `[min, max]` into `[0, 1]` without clamping.
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    inverse_lerp(min, max, value)
}

/// Clamps a value to the range [min, max].
///
/// NaN collapses to `min` so a bad channel never escapes its range.
///
/// # Example
///
/// ```rust
/// use tinct_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Modulo whose result always has the sign of the divisor.
///
/// Used for hue, which wraps instead of clamping: `-30 -> 330`,
/// `370 -> 10`.
///
/// # Example
///
/// ```rust
/// use tinct_math::euclidean_modulo;
///
/// assert_eq!(euclidean_modulo(370.0, 360.0), 10.0);
/// assert_eq!(euclidean_modulo(-30.0, 360.0), 330.0);
/// ```
#[inline]
pub fn euclidean_modulo(value: f64, modulus: f64) -> f64 {
    if !value.is_finite() || modulus == 0.0 {
        return 0.0;
    }
    let r = value.rem_euclid(modulus);
    // rem_euclid can return `modulus` itself for tiny negative inputs
    if r >= modulus { 0.0 } else { r }
}

/// Index of the equal-width segment of `[min, max)` that contains `value`.
///
/// Intervals are half-open, so a value on a boundary belongs to the upper
/// segment's start: with 6 segments over `[0, 360)`, `60` is segment 1.
/// The index wraps modulo `count`.
///
/// # Example
///
/// ```rust
/// use tinct_math::segment;
///
/// assert_eq!(segment(59.9, 6, 0.0, 360.0), 0);
/// assert_eq!(segment(60.0, 6, 0.0, 360.0), 1);
/// assert_eq!(segment(360.0, 6, 0.0, 360.0), 0);
/// ```
#[inline]
pub fn segment(value: f64, count: u32, min: f64, max: f64) -> u32 {
    if count == 0 || !value.is_finite() {
        return 0;
    }
    let width = (max - min) / count as f64;
    if width <= 0.0 {
        return 0;
    }
    let index = ((value - min) / width).floor() as i64;
    index.rem_euclid(count as i64) as u32
}

/// Rounds to a number of decimal digits.
///
/// Negative zero is folded into positive zero so formatted output never
/// shows `-0`.
///
/// # Example
///
/// ```rust
/// use tinct_math::round_to;
///
/// assert_eq!(round_to(2.71828, 3), 2.718);
/// assert_eq!(round_to(127.5, 0), 128.0);
/// ```
#[inline]
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor + 0.0
}

/// True when the value has no fractional part.
#[inline]
pub fn is_int(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn test_inverse_lerp_degenerate() {
        assert_eq!(inverse_lerp(5.0, 5.0, 7.0), 0.0);
    }

    #[test]
    fn test_map() {
        assert_eq!(map(0.5, 0.0, 1.0, 0.0, 255.0, false), 127.5);
        assert_eq!(map(-1.0, 0.0, 1.0, 0.0, 255.0, true), 0.0);
        assert_eq!(map(2.0, 0.0, 1.0, 0.0, 255.0, true), 255.0);
        assert_eq!(map(2.0, 0.0, 1.0, 0.0, 255.0, false), 510.0);
    }

    #[test]
    fn test_clamp_nan() {
        assert_eq!(clamp(f64::NAN, 0.0, 255.0), 0.0);
    }

    #[test]
    fn test_euclidean_modulo() {
        assert_eq!(euclidean_modulo(360.0, 360.0), 0.0);
        assert_eq!(euclidean_modulo(720.5, 360.0), 0.5);
        assert_eq!(euclidean_modulo(-360.0, 360.0), 0.0);
        assert_eq!(euclidean_modulo(-1e-20, 360.0), 0.0);
        assert_eq!(euclidean_modulo(f64::NAN, 360.0), 0.0);
    }

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(segment(0.0, 6, 0.0, 360.0), 0);
        for s in 0..6 {
            let start = s as f64 * 60.0;
            assert_eq!(segment(start, 6, 0.0, 360.0), s);
            assert_eq!(segment(start + 59.999, 6, 0.0, 360.0), s);
        }
        assert_eq!(segment(-1.0, 6, 0.0, 360.0), 5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.12345, 3), 0.123);
        assert_eq!(round_to(49.96, 1), 50.0);
        assert_eq!(round_to(-0.2, 0), 0.0);
        assert!(round_to(-0.2, 0).is_sign_positive());
    }

    #[test]
    fn test_is_int() {
        assert!(is_int(3.0));
        assert!(!is_int(3.5));
        assert!(!is_int(f64::INFINITY));
    }
}

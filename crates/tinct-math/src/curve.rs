//! Curve shapes used by the tone transforms.
//!
//! Both shapes are anchored at zero on `t = 0` and `t = 1`, so applying
//! them as an increment never moves the black and white points.

/// One-dimensional cubic Bezier evaluated at `t`.
///
/// # Formula
///
/// `(1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3`
///
/// # Example
///
/// ```rust
/// use tinct_math::cubic_bezier;
///
/// assert_eq!(cubic_bezier(0.0, 0.0, -1.0, 1.0, 0.0), 0.0);
/// assert_eq!(cubic_bezier(1.0, 0.0, -1.0, 1.0, 0.0), 0.0);
/// ```
#[inline]
pub fn cubic_bezier(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Parabola through `(0, 0)`, `(0.5, 1)` and `(1, 0)`.
///
/// `4 t (1 - t)`
#[inline]
pub fn parabola(t: f64) -> f64 {
    4.0 * t * (1.0 - t)
}

//! Random colors.

use rand::Rng;
use tinct_core::{registry, Rgb};
use tinct_math::map;

/// Opaque RGB with channels drawn uniformly from `[0, RGB_MAX]`.
///
/// With `range = Some((low, high))` each channel is remapped into
/// `[low, high]` afterwards.
pub fn random_rgb(range: Option<(f64, f64)>) -> Rgb {
    random_rgb_with(&mut rand::thread_rng(), range)
}

/// [`random_rgb`] drawing from the given generator.
pub fn random_rgb_with<R: Rng + ?Sized>(rng: &mut R, range: Option<(f64, f64)>) -> Rgb {
    let max = registry().rgb();
    let mut channel = || {
        let v = rng.gen_range(0.0..=max);
        match range {
            Some((low, high)) => map(v, 0.0, max, low, high, true),
            None => v,
        }
    };
    let (r, g, b) = (channel(), channel(), channel());
    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn within_rgb_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let c = random_rgb_with(&mut rng, None);
            for v in c.channels() {
                assert!((0.0..=255.0).contains(&v));
            }
            assert!(c.is_opaque());
        }
    }

    #[test]
    fn remapped_into_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let c = random_rgb_with(&mut rng, Some((100.0, 150.0)));
            for v in c.channels() {
                assert!((100.0..=150.0).contains(&v), "{v}");
            }
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = random_rgb_with(&mut StdRng::seed_from_u64(1), None);
        let b = random_rgb_with(&mut StdRng::seed_from_u64(1), None);
        assert_eq!(a, b);
    }
}

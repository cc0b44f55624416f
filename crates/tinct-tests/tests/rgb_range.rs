//! Behavior with a 10-bit RGB range.
//!
//! Runs in its own process so the installed table cannot leak into the
//! 8-bit tests.

use approx::assert_abs_diff_eq;
use tinct_color::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, to_hex};
use tinct_core::{install, registry, Color, Hex, Hsl, Ranges, Rgb};
use tinct_ops::invert;

fn setup() {
    // every test installs; only the first call wins
    let _ = install(Ranges::new(1023.0, 360.0, 100.0, 100.0, 100.0).unwrap());
    assert_eq!(registry().rgb(), 1023.0);
}

#[test]
fn hex_encodes_scaled_channels() {
    setup();
    assert_eq!(rgb_to_hex(&Rgb::new(1023.0, 511.5, 0.0)).as_str(), "#ff8000");
    assert_eq!(rgb_to_hex(&Rgb::new(2000.0, -4.0, 1023.0)).as_str(), "#ff00ff");
}

#[test]
fn hex_decodes_into_range() {
    setup();
    let rgb = hex_to_rgb(&Hex::parse("#ff8000").unwrap());
    assert_eq!(rgb.r, 1023.0);
    assert_abs_diff_eq!(rgb.g, 128.0 * 1023.0 / 255.0, epsilon = 1e-9);
    assert_eq!(rgb.b, 0.0);

    let full = Rgb::new(1023.0, 0.0, 1023.0);
    assert_eq!(hex_to_rgb(&rgb_to_hex(&full)), full);
}

#[test]
fn hsl_and_hex_agree() {
    setup();
    let orange = Hsl::new(30.0, 100.0, 50.0);
    let rgb = hsl_to_rgb(&orange);
    assert_eq!(rgb.r, 1023.0);
    assert_abs_diff_eq!(rgb.g, 511.5, epsilon = 1e-9);
    assert_eq!(to_hex(&Color::Hsl(orange)).as_str(), "#ff8000");
}

#[test]
fn invert_uses_range_max() {
    setup();
    let c = invert(&Color::Rgb(Rgb::new(0.0, 23.0, 1023.0)));
    assert_eq!(c, Color::Rgb(Rgb::new(1023.0, 1000.0, 0.0)));
}

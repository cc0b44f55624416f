//! Behavior with alpha in `[0, 1]`.
//!
//! Runs in its own process so the installed table cannot leak into the
//! percent-alpha tests.

use tinct_color::{constrain, parse, rgb_to_hex, rgb_to_string, round, to_rgb};
use tinct_core::{install, registry, Color, CoreError, Hex, Ranges, Rgb};

fn setup() {
    // every test installs; only the first call wins
    let _ = install(Ranges::UNIT_ALPHA);
    assert_eq!(registry().alpha(), 1.0);
}

#[test]
fn second_install_fails() {
    setup();
    assert!(matches!(
        install(Ranges::DEFAULT),
        Err(CoreError::AlreadyInstalled)
    ));
    assert_eq!(*registry(), Ranges::UNIT_ALPHA);
}

#[test]
fn opaque_is_one() {
    setup();
    assert_eq!(Rgb::new(1.0, 2.0, 3.0).a, 1.0);
    assert_eq!(rgb_to_string(&Rgb::new(1.0, 2.0, 3.0)), "rgb(1, 2, 3)");
}

#[test]
fn css_alpha_is_unscaled() {
    setup();
    assert_eq!(rgb_to_string(&Rgb::with_alpha(0.0, 0.0, 0.0, 0.5)), "rgba(0, 0, 0, 0.5)");
    let c = parse("rgba(10, 20, 30, 0.25)").unwrap();
    assert_eq!(c.as_rgb().unwrap().a, 0.25);
}

#[test]
fn hex_alpha_and_precision() {
    setup();
    let rgb = to_rgb(&Color::Hex(Hex::parse("#ff000080").unwrap()));
    let rounded = round(&Color::Rgb(rgb), true);
    assert_eq!(rounded.as_rgb().unwrap().a, 0.502);
    assert_eq!(rgb_to_hex(&Rgb::with_alpha(255.0, 0.0, 0.0, 0.5)).as_str(), "#ff000080");
}

#[test]
fn alpha_clamps_to_one() {
    setup();
    let c = constrain(&Color::Rgb(Rgb::with_alpha(0.0, 0.0, 0.0, 5.0)));
    assert_eq!(c.as_rgb().unwrap().a, 1.0);
}

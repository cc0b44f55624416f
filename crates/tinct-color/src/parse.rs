//! Parsing CSS color text.
//!
//! The allowed formats are:
//! * `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! * `rgb(r,g,b)`, `rgba(r,g,b,a)`
//! * `hsl(h,s,l)`, `hsla(h,s,l,a)` (`%` after s and l and `deg` after h are optional)
//!
//! CSS alpha is given in `[0, 1]` or as a percentage and is scaled into the
//! registry alpha range. Channel values are not constrained.

use tinct_core::{registry, Color, Hex, Hsl, Rgb};
use tracing::debug;

use crate::error::{ColorError, ColorResult};

/// Parses CSS color text into a tagged color.
///
/// ```rust
/// use tinct_core::{Color, Rgb};
/// use tinct_color::parse;
///
/// assert_eq!(parse("rgb(255, 0, 0)").unwrap(), Color::Rgb(Rgb::new(255.0, 0.0, 0.0)));
/// assert!(parse("hsl(120, 100%, 50%)").unwrap().is_hsl());
/// assert!(parse("#f0c").unwrap().is_hex());
/// assert!(parse("chartreuse").is_err());
/// ```
pub fn parse(text: &str) -> ColorResult<Color> {
    let result = parse_inner(text.trim());
    if let Err(err) = &result {
        debug!(%err, "color parse failed");
    }
    result
}

fn parse_inner(text: &str) -> ColorResult<Color> {
    if text.starts_with('#') {
        return Ok(Color::Hex(Hex::parse(text)?));
    }
    let fail = |reason| ColorError::Parse {
        input: text.to_string(),
        reason,
    };

    let lower = text.to_ascii_lowercase();
    let (name, rest) = lower
        .split_once('(')
        .ok_or_else(|| fail("expected a hex value or a color function"))?;
    let args = rest
        .strip_suffix(')')
        .ok_or_else(|| fail("missing closing parenthesis"))?;
    let args: Vec<&str> = args.split(',').map(str::trim).collect();

    let (is_hsl, wants_alpha) = match name.trim() {
        "rgb" => (false, false),
        "rgba" => (false, true),
        "hsl" => (true, false),
        "hsla" => (true, true),
        _ => return Err(fail("unknown color function")),
    };
    if args.len() != if wants_alpha { 4 } else { 3 } {
        return Err(fail("wrong number of arguments"));
    }

    let alpha = match args.get(3) {
        Some(a) => css_alpha(a).ok_or_else(|| fail("alpha is not a number"))?,
        None => registry().alpha(),
    };

    if is_hsl {
        let h = number(args[0].strip_suffix("deg").unwrap_or(args[0]));
        let s = number(args[1].strip_suffix('%').unwrap_or(args[1]));
        let l = number(args[2].strip_suffix('%').unwrap_or(args[2]));
        match (h, s, l) {
            (Some(h), Some(s), Some(l)) => Ok(Color::Hsl(Hsl::with_alpha(h, s, l, alpha))),
            _ => Err(fail("hsl channel is not a number")),
        }
    } else {
        match (number(args[0]), number(args[1]), number(args[2])) {
            (Some(r), Some(g), Some(b)) => Ok(Color::Rgb(Rgb::with_alpha(r, g, b, alpha))),
            _ => Err(fail("rgb channel is not a number")),
        }
    }
}

fn number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn css_alpha(text: &str) -> Option<f64> {
    let unit = match text.strip_suffix('%') {
        Some(percent) => number(percent)? / 100.0,
        None => number(text)?,
    };
    Some(unit * registry().alpha())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functions() {
        assert_eq!(
            parse("rgba(1, 2, 3, 0.5)").unwrap(),
            Color::Rgb(Rgb::with_alpha(1.0, 2.0, 3.0, 50.0))
        );
        assert_eq!(
            parse("  HSLA(120deg,100%,25%,40%) ").unwrap(),
            Color::Hsl(Hsl::with_alpha(120.0, 100.0, 25.0, 40.0))
        );
        assert_eq!(
            parse("hsl(400, 120, -5)").unwrap(),
            Color::Hsl(Hsl::new(400.0, 120.0, -5.0))
        );
    }

    #[test]
    fn hex_kept_verbatim() {
        let c = parse("#ABCDEF").unwrap();
        assert_eq!(c.as_hex().unwrap().as_str(), "#ABCDEF");
    }

    #[test]
    fn errors() {
        for bad in [
            "",
            "red",
            "rgb(1,2)",
            "rgb(1,2,3,4)",
            "rgba(1,2,3)",
            "rgb(1,2,3",
            "cmyk(1,2,3)",
            "rgb(a,b,c)",
            "rgba(1,2,3,x)",
            "hsl(1,2%,z%)",
        ] {
            assert!(
                matches!(parse(bad), Err(ColorError::Parse { .. })),
                "{bad:?} should fail"
            );
        }
        assert!(matches!(parse("#12"), Err(ColorError::Core(_))));
    }
}

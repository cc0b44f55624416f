//! Convert command.
//!
//! Prints a CSS color in one notation or in all of them.

use anyhow::Result;
use clap::Args;

use tinct_color::{round, to_hex, to_hsl, to_rgb, to_string};
use tinct_core::{Color, ColorKind};

use super::{parse_color, Report};

/// Arguments for the `convert` command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input color: #hex, rgb(), rgba(), hsl() or hsla()
    pub color: String,

    /// Target notation: rgb, hsl, hex (default: all)
    #[arg(short, long)]
    pub to: Option<ColorKind>,
}

/// `color` in notation `kind`.
pub fn convert(color: &Color, kind: ColorKind) -> String {
    let converted = match kind {
        ColorKind::Rgb => Color::Rgb(to_rgb(color)),
        ColorKind::Hsl => Color::Hsl(to_hsl(color)),
        ColorKind::Hex => Color::Hex(to_hex(&round(color, false))),
    };
    to_string(&converted)
}

/// Run the convert command.
pub fn run(args: ConvertArgs, json: bool) -> Result<()> {
    let color = parse_color(&args.color)?;
    match args.to {
        Some(kind) if !json => {
            println!("{}", convert(&color, kind));
            Ok(())
        }
        _ => Report::new(&to_rgb(&color), &to_hsl(&color)).print(json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_color::parse;

    #[test]
    fn between_notations() {
        let red = parse("rgb(255, 0, 0)").unwrap();
        assert_eq!(convert(&red, ColorKind::Hsl), "hsl(0, 100%, 50%)");
        assert_eq!(convert(&red, ColorKind::Hex), "#ff0000");

        let short = parse("#f0c").unwrap();
        assert_eq!(convert(&short, ColorKind::Rgb), "rgb(255, 0, 204)");
        assert_eq!(convert(&short, ColorKind::Hex), "#ff00cc");
    }

    #[test]
    fn keeps_alpha() {
        let c = parse("hsla(120, 100%, 50%, 0.5)").unwrap();
        assert_eq!(convert(&c, ColorKind::Rgb), "rgba(0, 255, 0, 0.5)");
        assert_eq!(convert(&c, ColorKind::Hex), "#00ff0080");
    }
}

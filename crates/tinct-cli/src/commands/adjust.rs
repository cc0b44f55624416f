//! Adjust command.
//!
//! Runs operators on a color in a fixed order:
//! invert, add, sub, multiply, contrast, brightness, tint.
//! The result is printed in the input's notation unless `--to` is given.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use tinct_core::{Color, ColorKind};
use tinct_ops::{add, brightness_curve, color_curve, contrast_curve, invert, multiply, sub};
use tinct_ops::{ChannelStrength, Operand};

use super::convert::convert;
use super::{parse_color, parse_triple};

/// Arguments for the `adjust` command.
#[derive(Args)]
pub struct AdjustArgs {
    /// Input color: #hex, rgb(), rgba(), hsl() or hsla()
    pub color: String,

    /// Invert first
    #[arg(long)]
    pub invert: bool,

    /// Add a color or a number (on hsl() input a color operand shifts h, s, l)
    #[arg(long, allow_hyphen_values = true)]
    pub add: Option<String>,

    /// Subtract a color or a number (RGB input only)
    #[arg(long, allow_hyphen_values = true)]
    pub sub: Option<String>,

    /// Multiply by a color or a number (RGB input only)
    #[arg(long, allow_hyphen_values = true)]
    pub multiply: Option<String>,

    /// Contrast curve strength
    #[arg(long, allow_hyphen_values = true)]
    pub contrast: Option<f64>,

    /// Brightness curve strength
    #[arg(long, allow_hyphen_values = true)]
    pub brightness: Option<f64>,

    /// Per-channel color curve strengths (R,G,B)
    #[arg(long, allow_hyphen_values = true)]
    pub tint: Option<String>,

    /// Output notation: rgb, hsl, hex (default: input notation)
    #[arg(short, long)]
    pub to: Option<ColorKind>,
}

/// A number becomes a scalar operand, anything else is parsed as a color.
fn parse_operand(text: &str) -> Result<Operand> {
    match text.trim().parse::<f64>() {
        Ok(v) => Ok(Operand::Scalar(v)),
        Err(_) => Ok(Operand::Color(parse_color(text)?)),
    }
}

/// Applies the requested steps to `color`.
pub fn adjust(color: Color, args: &AdjustArgs) -> Result<Color> {
    let mut color = color;
    if args.invert {
        color = invert(&color);
    }
    if let Some(text) = &args.add {
        color = add(&color, &parse_operand(text)?);
    }
    if let Some(text) = &args.sub {
        color = sub(&color, &parse_operand(text)?);
    }
    if let Some(text) = &args.multiply {
        color = multiply(&color, &parse_operand(text)?);
    }
    if let Some(k) = args.contrast {
        color = contrast_curve(&color, k);
    }
    if let Some(k) = args.brightness {
        color = brightness_curve(&color, k);
    }
    if let Some(text) = &args.tint {
        let [r, g, b] = parse_triple(text)?;
        color = color_curve(&color, ChannelStrength::new(r, g, b));
    }
    debug!(?color, "adjusted");
    Ok(color)
}

/// Run the adjust command.
pub fn run(args: AdjustArgs, json: bool) -> Result<()> {
    let input = parse_color(&args.color)?;
    let kind = args.to.unwrap_or(input.kind());
    let result = convert(&adjust(input, &args)?, kind);
    if json {
        println!("{}", serde_json::json!({ "color": result }));
    } else {
        println!("{result}");
    }
    Ok(())
}

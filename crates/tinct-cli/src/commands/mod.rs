//! CLI command implementations

pub mod adjust;
pub mod convert;
pub mod pick;
pub mod random;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use tinct_color::{hsl_to_string, rgb_to_hex, rgb_to_string, round_rgb};
use tinct_core::{registry, Color, Hsl, Rgb};

/// Text color readable on a background of lightness `hsl.l`.
///
/// Backgrounds at or below half lightness get white text.
pub fn text_color(hsl: &Hsl) -> &'static str {
    if hsl.l <= registry().lightness() / 2.0 {
        "#ffffff"
    } else {
        "#000000"
    }
}

/// The three notations of one color plus its text color.
#[derive(Debug, Serialize)]
pub struct Report {
    pub rgb: String,
    pub hsl: String,
    pub hex: String,
    pub text: &'static str,
}

impl Report {
    /// `rgb` and `hsl` must describe the same color.
    pub fn new(rgb: &Rgb, hsl: &Hsl) -> Self {
        Self {
            rgb: rgb_to_string(rgb),
            hsl: hsl_to_string(hsl),
            hex: rgb_to_hex(&round_rgb(rgb, false)).to_string(),
            text: text_color(hsl),
        }
    }

    /// Prints one notation per line, or a JSON object.
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            println!("{}", self.rgb);
            println!("{}", self.hsl);
            println!("{}", self.hex);
            println!("text {}", self.text);
        }
        Ok(())
    }
}

/// Parses a CSS color argument.
pub fn parse_color(text: &str) -> Result<Color> {
    tinct_color::parse(text).with_context(|| format!("Invalid color: {text}"))
}

/// Parses `r,g,b`.
pub fn parse_triple(s: &str) -> Result<[f64; 3]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        bail!("Expected 3 values (R,G,B), got {}", parts.len());
    }
    Ok([
        parts[0].trim().parse()?,
        parts[1].trim().parse()?,
        parts[2].trim().parse()?,
    ])
}

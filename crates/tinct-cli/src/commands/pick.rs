//! Pick command.
//!
//! Builds a color from hue, saturation and lightness the way a slider
//! panel does: constrain, round to integers, then derive RGB and HEX.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use tinct_color::{constrain_hsl, hsl_to_rgb, round_hsl};
use tinct_core::Hsl;

use super::Report;

/// Arguments for the `pick` command.
#[derive(Args)]
pub struct PickArgs {
    /// Hue in degrees (wraps)
    #[arg(allow_negative_numbers = true)]
    pub h: f64,

    /// Saturation (clamped to the range maximum)
    #[arg(allow_negative_numbers = true)]
    pub s: f64,

    /// Lightness (clamped to the range maximum)
    #[arg(allow_negative_numbers = true)]
    pub l: f64,
}

/// Constrained, integer HSL plus the RGB it converts to.
pub fn pick(h: f64, s: f64, l: f64) -> Report {
    let hsl = round_hsl(&constrain_hsl(&Hsl::new(h, s, l)), false);
    let rgb = hsl_to_rgb(&hsl);
    debug!(?hsl, ?rgb, "picked");
    Report::new(&rgb, &hsl)
}

/// Run the pick command.
pub fn run(args: PickArgs, json: bool) -> Result<()> {
    pick(args.h, args.s, args.l).print(json)
}

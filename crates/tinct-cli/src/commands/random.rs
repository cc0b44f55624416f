//! Random command.

use anyhow::{bail, Result};
use clap::Args;

use tinct_color::{random_rgb, rgb_to_hsl, round_hsl, round_rgb};

use super::Report;

/// Arguments for the `random` command.
#[derive(Args)]
pub struct RandomArgs {
    /// Lower bound for every RGB channel
    #[arg(long, requires = "max")]
    pub min: Option<f64>,

    /// Upper bound for every RGB channel
    #[arg(long, requires = "min")]
    pub max: Option<f64>,
}

/// Run the random command.
pub fn run(args: RandomArgs, json: bool) -> Result<()> {
    let range = match (args.min, args.max) {
        (Some(min), Some(max)) if min > max => bail!("--min {min} is above --max {max}"),
        (Some(min), Some(max)) => Some((min, max)),
        _ => None,
    };
    let rgb = round_rgb(&random_rgb(range), false);
    let hsl = round_hsl(&rgb_to_hsl(&rgb), false);
    Report::new(&rgb, &hsl).print(json)
}

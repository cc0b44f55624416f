//! tinct - color picker and converter
//!
//! Picks colors from HSL values, converts between CSS notations and
//! runs the tinct operators from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tinct_core::{AlphaProfile, Ranges};

mod commands;

use commands::adjust::AdjustArgs;
use commands::convert::ConvertArgs;
use commands::pick::PickArgs;
use commands::random::RandomArgs;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "RGB/HSL/HEX color picker and converter")]
#[command(long_about = "
Pick, convert and adjust colors in CSS notation.

Examples:
  tinct pick 210 80 40                      # HSL input -> rgb/hsl/hex + text color
  tinct random                              # same for a random color
  tinct convert '#f0c'                      # all notations
  tinct convert 'rgb(255, 0, 0)' --to hsl   # one notation
  tinct adjust '#336699' --invert
  tinct adjust 'hsl(200, 50%, 40%)' --add 'hsl(30, 0, 0)' --brightness 0.1
  tinct --config ranges.yaml pick 0 100 50
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML range file overriding the channel maxima
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Alpha in [0, 1] instead of percent
    #[arg(long = "alpha-unit", global = true)]
    alpha_unit: bool,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a color from hue, saturation and lightness
    #[command(visible_alias = "p")]
    Pick(PickArgs),

    /// Random color
    #[command(visible_alias = "r")]
    Random(RandomArgs),

    /// Print a color in other notations
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Apply operators and curves to a color
    #[command(visible_alias = "a")]
    Adjust(AdjustArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("tinct=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "tinct=warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Installs the range table before any color is built.
fn install_ranges(config: Option<&Path>, alpha_unit: bool) -> Result<()> {
    let mut ranges = match config {
        Some(path) => Ranges::from_file(path)
            .with_context(|| format!("Failed to load range file: {}", path.display()))?,
        None => Ranges::DEFAULT,
    };
    if alpha_unit {
        ranges = Ranges::new(
            ranges.rgb(),
            ranges.hue(),
            ranges.saturation(),
            ranges.lightness(),
            AlphaProfile::Unit.max(),
        )?;
    }
    debug!(?ranges, "installing range table");
    tinct_core::install(ranges).context("Range table already installed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    install_ranges(cli.config.as_deref(), cli.alpha_unit)?;

    match cli.command {
        Commands::Pick(args) => commands::pick::run(args, cli.json),
        Commands::Random(args) => commands::random::run(args, cli.json),
        Commands::Convert(args) => commands::convert::run(args, cli.json),
        Commands::Adjust(args) => commands::adjust::run(args, cli.json),
    }
}

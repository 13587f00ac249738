use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wavefringe::core::models::params::SlitMode;
use wavefringe::core::optics::angle::AngleConvention;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Wavefringe CLI - compute single-slit diffraction and double-slit interference patterns and export them for plotting.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to render screen images.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a 1-D intensity curve across the screen and write it as CSV.
    Curve(CurveArgs),
    /// Render the pattern as a square screen image and write it as CSV.
    Screen(ScreenArgs),
    /// Print the current settings and the analytic landmarks of the pattern.
    Info(InfoArgs),
}

/// Physical set-up shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SetupArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pattern to compute: 'single' or 'double'.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<SlitMode>,

    /// Wavelength of the light in nanometers.
    #[arg(long = "wavelength-nm", value_name = "FLOAT")]
    pub wavelength_nm: Option<f64>,

    /// Slit width in micrometers.
    #[arg(long = "slit-width-um", value_name = "FLOAT")]
    pub slit_width_um: Option<f64>,

    /// Center-to-center slit separation in micrometers (double-slit mode).
    #[arg(long = "slit-separation-um", value_name = "FLOAT")]
    pub slit_separation_um: Option<f64>,

    /// Distance from the slits to the screen in millimeters.
    #[arg(long = "screen-distance-mm", value_name = "FLOAT")]
    pub screen_distance_mm: Option<f64>,

    /// Angle convention: 'exact' (atan) or 'small-angle' (x/L).
    #[arg(long, value_name = "CONVENTION")]
    pub angle: Option<AngleConvention>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S optics.wavelength-nm=632.8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `curve` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CurveArgs {
    #[command(flatten)]
    pub setup: SetupArgs,

    /// Number of screen samples.
    #[arg(short = 'n', long, value_name = "INT")]
    pub samples: Option<usize>,

    /// Half width of the sampled screen region in millimeters.
    /// Defaults to half the screen distance.
    #[arg(long = "half-width-mm", value_name = "FLOAT")]
    pub half_width_mm: Option<f64>,

    /// Rescale the curve so its largest sample is exactly 1.
    #[arg(long)]
    pub normalize: bool,

    /// Output CSV path. Writes to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `screen` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ScreenArgs {
    #[command(flatten)]
    pub setup: SetupArgs,

    /// Pixels along each side of the screen image.
    #[arg(short = 'g', long = "grid-size", value_name = "INT")]
    pub grid_size: Option<usize>,

    /// Half width of the rendered screen region in millimeters.
    /// Defaults to half the screen distance.
    #[arg(long = "half-width-mm", value_name = "FLOAT")]
    pub half_width_mm: Option<f64>,

    /// Output CSV path. Writes to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    #[command(flatten)]
    pub setup: SetupArgs,
}

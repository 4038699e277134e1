//! gmath - command line front end for the gmath crates
//!
//! Evaluates easing curves, converts colours, analyses point clouds and
//! rounds integers without writing any Rust.

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gmath_color::ColorSpace;
use gmath_math::{EaseMode, Easing};

mod commands;

#[derive(Parser)]
#[command(name = "gmath")]
#[command(author, version, about = "Graphics math from the command line")]
#[command(long_about = "
Small command line front end for the gmath crates.

Examples:
  gmath ease cubic in-out 0 0.25 0.5 0.75 1
  gmath srgb --to-linear 1 0.5 0.2
  gmath srgb --to-srgb 0.18 0.18 0.18 --gamma 2.2
  gmath xyz linear-srgb d50 1 1 1
  gmath covariance points.txt --eigen
  gmath round ceil-pow2 1000
  gmath round round-mul 37 8
  gmath rand sphere --count 4 --seed 7
  gmath --json covariance points.csv
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an easing curve
    #[command(visible_alias = "e")]
    Ease(EaseArgs),

    /// Encode or decode sRGB
    Srgb(SrgbArgs),

    /// Convert between linear sRGB and CIE XYZ
    Xyz(XyzArgs),

    /// Covariance matrix (and principal axes) of a point file
    #[command(visible_alias = "cov")]
    Covariance(CovarianceArgs),

    /// Round integers to powers of two or multiples
    Round(RoundArgs),

    /// Sample random points on or in a circle or sphere
    Rand(RandArgs),
}

#[derive(Args)]
struct EaseArgs {
    /// Curve family (linear, quad, cubic, quart, quint, sine, circ, expo, elastic, back, bounce)
    family: Easing,

    /// Eased end (in, out, in-out)
    mode: EaseMode,

    /// Parameters in [0, 1]
    #[arg(required = true)]
    t: Vec<f32>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("direction").required(true).args(["to_linear", "to_srgb"])))]
struct SrgbArgs {
    /// Decode sRGB to linear light
    #[arg(long)]
    to_linear: bool,

    /// Encode linear light to sRGB
    #[arg(long)]
    to_srgb: bool,

    /// Red, green and blue
    #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
    rgb: Vec<f32>,

    /// Exponent of the power segment of the sRGB curve (default 2.4)
    #[arg(short, long)]
    gamma: Option<f32>,
}

#[derive(Args)]
struct XyzArgs {
    /// Source space (linear-srgb, d65, d50)
    from: ColorSpace,

    /// Target space (linear-srgb, d65, d50)
    to: ColorSpace,

    /// Three components in the source space
    #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
    value: Vec<f32>,

    /// Also print the xy chromaticity of the result
    #[arg(long)]
    chromaticity: bool,
}

#[derive(Args)]
struct CovarianceArgs {
    /// Point file: one point per line, 2 to 4 columns separated by spaces or commas
    input: PathBuf,

    /// Also compute eigenvalues and eigenvectors, largest first
    #[arg(short, long)]
    eigen: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoundOp {
    /// Next power of two
    CeilPow2,
    /// Previous power of two
    FloorPow2,
    /// Nearest power of two
    RoundPow2,
    /// Is the value a power of two
    IsPow2,
    /// Next multiple
    CeilMul,
    /// Previous multiple
    FloorMul,
    /// Nearest multiple
    RoundMul,
    /// Is the value a multiple
    IsMul,
}

#[derive(Args)]
struct RoundArgs {
    /// Operation
    #[arg(value_enum)]
    op: RoundOp,

    /// Value to round
    #[arg(allow_negative_numbers = true)]
    value: i64,

    /// Multiple (required by the *-mul operations)
    #[arg(allow_negative_numbers = true)]
    multiple: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Shape {
    /// Points on a circle
    Circle,
    /// Points inside a disk
    Disk,
    /// Points on a sphere
    Sphere,
    /// Points inside a ball
    Ball,
}

#[derive(Args)]
struct RandArgs {
    /// Where to sample
    #[arg(value_enum)]
    shape: Shape,

    /// Radius
    #[arg(short, long, default_value = "1.0")]
    radius: f32,

    /// Number of points
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = commands::Output { json: cli.json };
    match cli.command {
        Commands::Ease(args) => commands::ease::run(args, out),
        Commands::Srgb(args) => commands::srgb::run(args, out),
        Commands::Xyz(args) => commands::xyz::run(args, out),
        Commands::Covariance(args) => commands::covariance::run(args, out),
        Commands::Round(args) => commands::round::run(args, out),
        Commands::Rand(args) => commands::rand::run(args, out),
    }
}

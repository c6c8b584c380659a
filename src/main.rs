//! Builds cars through `CarBuilder` from the command line.
//!
//! `demo` (the default) prints the two showcase cars. `build` assembles a
//! single car from flags or a TOML description and fails with the builder's
//! message when the staged values are invalid.
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use car_builder::core::engine::EngineKind;
use car_builder::utils::{self, BuildOptions};

#[derive(Parser)]
#[command(name = "car-builder")]
#[command(about = "Build immutable cars with a fluent builder")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print the two showcase cars
    Demo,
    /// Build and print a single car
    Build(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// TOML car description to start from
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of passenger seats
    #[arg(short, long, allow_negative_numbers = true)]
    seats: Option<i32>,

    /// Engine to install
    #[arg(short, long, value_enum)]
    engine: Option<EngineKind>,

    /// Fit a GPS unit
    #[arg(long)]
    gps: bool,

    /// Fit a trip computer
    #[arg(long)]
    trip_computer: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => utils::run_demo(&mut stdout),
        Commands::Build(args) => {
            let options = BuildOptions {
                config: args.config.as_deref(),
                seats: args.seats,
                engine: args.engine,
                gps: args.gps,
                trip_computer: args.trip_computer,
            };
            utils::run_build(&options, &mut stdout)
        }
    }
}

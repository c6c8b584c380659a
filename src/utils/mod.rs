use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::builders::car::CarBuilder;
use crate::core::car::Car;
use crate::core::config::CarSpec;
use crate::core::engine::{DieselEngine, EngineKind, SportEngine};

/// Options for a single custom build, as collected by the `build` command.
#[derive(Debug, Default)]
pub struct BuildOptions<'a> {
    pub config: Option<&'a Path>,
    pub seats: Option<i32>,
    pub engine: Option<EngineKind>,
    pub gps: bool,
    pub trip_computer: bool,
}

/// Installs the stderr log subscriber. `verbose` switches from info to debug.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("car_builder=debug")
    } else {
        EnvFilter::new("car_builder=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Builds the two showcase cars: a two-seat sports car with every feature
/// and a five-seat family car with none.
pub fn demo_cars() -> Result<Vec<Car>> {
    let sports_car = CarBuilder::new()
        .seats(2)
        .engine(SportEngine)
        .gps(true)
        .trip_computer(true)
        .build()?;

    let family_car = CarBuilder::new()
        .seats(5)
        .engine(DieselEngine)
        .gps(false)
        .trip_computer(false)
        .build()?;

    Ok(vec![sports_car, family_car])
}

/// Prints the showcase cars, one per line, in construction order.
pub fn run_demo(out: &mut impl Write) -> Result<()> {
    let cars = demo_cars()?;
    info!(count = cars.len(), "built demo cars");

    for car in &cars {
        writeln!(out, "{car}")?;
    }
    Ok(())
}

/// Builds one car from a description file and/or explicit options, then
/// prints it.
///
/// The file is staged first; explicit options override what it set.
pub fn run_build(options: &BuildOptions<'_>, out: &mut impl Write) -> Result<()> {
    let mut builder = match options.config {
        Some(path) => {
            info!(path = %path.display(), "loading car description");
            CarSpec::load(path)?.to_builder()
        }
        None => CarBuilder::new(),
    };

    if let Some(seats) = options.seats {
        builder.seats(seats);
    }
    if let Some(kind) = options.engine {
        builder.boxed_engine(Some(kind.create()));
    }
    if options.gps {
        builder.gps(true);
    }
    if options.trip_computer {
        builder.trip_computer(true);
    }

    let car = builder.build()?;
    writeln!(out, "{car}")?;
    Ok(())
}

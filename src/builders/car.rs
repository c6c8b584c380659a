use tracing::{debug, warn};

use crate::core::car::Car;
use crate::core::engine::Engine;
use crate::core::error::BuildError;

/// Staging area for a [`Car`].
///
/// Setters store whatever they are given, including values `build()` will
/// later reject, and return the builder so calls can be chained. Validation
/// happens only in `build()`, which leaves the builder as it was: the same
/// builder can be adjusted and built again.
///
/// ```
/// use car_builder::builders::car::CarBuilder;
/// use car_builder::core::engine::SportEngine;
///
/// let car = CarBuilder::new()
///     .seats(2)
///     .engine(SportEngine)
///     .gps(true)
///     .trip_computer(true)
///     .build()
///     .unwrap();
/// assert_eq!(car.seats(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CarBuilder {
    seats: i32,
    engine: Option<Box<dyn Engine>>,
    has_gps: bool,
    has_trip_computer: bool,
}

impl CarBuilder {
    /// Creates a builder with no engine, zero seats and both features off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seats(&mut self, seats: i32) -> &mut Self {
        self.seats = seats;
        self
    }

    pub fn engine<E: Engine + 'static>(&mut self, engine: E) -> &mut Self {
        self.engine = Some(Box::new(engine));
        self
    }

    /// Stores an already boxed engine, or clears it when given `None`.
    pub fn boxed_engine(&mut self, engine: Option<Box<dyn Engine>>) -> &mut Self {
        self.engine = engine;
        self
    }

    pub fn gps(&mut self, has_gps: bool) -> &mut Self {
        self.has_gps = has_gps;
        self
    }

    pub fn trip_computer(&mut self, has_trip_computer: bool) -> &mut Self {
        self.has_trip_computer = has_trip_computer;
        self
    }

    /// Validates the staged values and produces an immutable [`Car`].
    ///
    /// The engine is checked before the seat count, so a builder missing both
    /// reports `BuildError::MissingEngine`. The car receives its own copy of
    /// the engine and is unaffected by later changes to this builder.
    pub fn build(&self) -> Result<Car, BuildError> {
        let car = self.validate().map(|(seats, engine)| {
            Car::new(seats, engine.clone_box(), self.has_gps, self.has_trip_computer)
        });

        match &car {
            Ok(car) => debug!(%car, "built car"),
            Err(e) => warn!(seats = self.seats, "car construction rejected: {e}"),
        }
        car
    }

    fn validate(&self) -> Result<(u32, &dyn Engine), BuildError> {
        let Some(engine) = self.engine.as_deref() else {
            return Err(BuildError::MissingEngine);
        };
        // Anything that fails the conversion is zero or negative.
        let seats = u32::try_from(self.seats)
            .ok()
            .filter(|&seats| seats > 0)
            .ok_or(BuildError::InvalidSeats { seats: self.seats })?;
        Ok((seats, engine))
    }
}

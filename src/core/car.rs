use std::fmt;

use crate::core::engine::Engine;

/// A fully validated car.
///
/// Fields are private and there are no setters: once `CarBuilder::build`
/// hands a `Car` out, its values never change. Construction is only possible
/// through the builder, which guarantees `seats > 0` and an engine.
#[derive(Debug, Clone)]
pub struct Car {
    seats: u32,
    engine: Box<dyn Engine>,
    has_gps: bool,
    has_trip_computer: bool,
}

impl Car {
    pub(crate) fn new(
        seats: u32,
        engine: Box<dyn Engine>,
        has_gps: bool,
        has_trip_computer: bool,
    ) -> Self {
        Self {
            seats,
            engine,
            has_gps,
            has_trip_computer,
        }
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    pub fn has_gps(&self) -> bool {
        self.has_gps
    }

    pub fn has_trip_computer(&self) -> bool {
        self.has_trip_computer
    }
}

impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.seats == other.seats
            && *self.engine == *other.engine
            && self.has_gps == other.has_gps
            && self.has_trip_computer == other.has_trip_computer
    }
}

impl Eq for Car {}

/// Renders `Car{seats=2, engine=Sport Engine, hasGPS=true, hasTripComputer=true}`.
impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car{{seats={}, engine={}, hasGPS={}, hasTripComputer={}}}",
            self.seats,
            self.engine.engine_type(),
            self.has_gps,
            self.has_trip_computer
        )
    }
}

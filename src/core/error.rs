use thiserror::Error;

/// Raised by `CarBuilder::build` when the staged state cannot produce a car.
///
/// Every variant is an invalid construction state: a usage error in the
/// calling code, never a transient condition. Retrying without changing the
/// builder yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Engine must be set!")]
    MissingEngine,
    #[error("Seats must be greater than 0!")]
    InvalidSeats { seats: i32 },
}

impl BuildError {
    /// All build failures belong to the single invalid-state kind.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, BuildError::MissingEngine | BuildError::InvalidSeats { .. })
    }

    /// The human-readable reason, identical to the `Display` output.
    pub fn reason(&self) -> &'static str {
        match self {
            BuildError::MissingEngine => "Engine must be set!",
            BuildError::InvalidSeats { .. } => "Seats must be greater than 0!",
        }
    }
}

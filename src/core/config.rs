use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::builders::car::CarBuilder;
use crate::core::car::Car;
use crate::core::engine::EngineKind;

/// A declarative car description, read from a TOML file.
///
/// Mirrors the builder's staged fields and uses the same defaults, so a
/// partial file stages only what it names:
///
/// ```toml
/// seats = 5
/// engine = "diesel"
/// gps = false
/// trip_computer = false
/// ```
///
/// Nothing is validated at load time. A file without an engine or with a
/// non-positive seat count loads fine and is rejected by `build()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarSpec {
    pub seats: i32,
    pub engine: Option<EngineKind>,
    pub gps: bool,
    pub trip_computer: bool,
}

impl CarSpec {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read car description {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse car description {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid car description")
    }

    /// Stages every field of this description on a fresh builder.
    pub fn to_builder(&self) -> CarBuilder {
        let mut builder = CarBuilder::new();
        builder
            .seats(self.seats)
            .boxed_engine(self.engine.map(EngineKind::create))
            .gps(self.gps)
            .trip_computer(self.trip_computer);
        builder
    }

    pub fn build(&self) -> Result<Car> {
        Ok(self.to_builder().build()?)
    }
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The capability every engine provides: a human-readable type label.
///
/// The set of implementors is open. Anything that can name itself can be
/// handed to `CarBuilder::engine`.
pub trait Engine: fmt::Debug + Send + Sync {
    /// Returns the label shown in a car's summary (e.g. `"Sport Engine"`).
    fn engine_type(&self) -> &str;

    /// Clones this engine behind a fresh box.
    ///
    /// A builder keeps its staged engine after `build()`, so every car it
    /// produces needs its own copy.
    fn clone_box(&self) -> Box<dyn Engine>;
}

impl Clone for Box<dyn Engine> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Engines carry no state, so two handles are the same engine when they
/// report the same label.
impl<'a> PartialEq for dyn Engine + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.engine_type() == other.engine_type()
    }
}

impl<'a> Eq for dyn Engine + 'a {}

impl<'a> fmt::Display for dyn Engine + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.engine_type())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SportEngine;

impl Engine for SportEngine {
    fn engine_type(&self) -> &str {
        "Sport Engine"
    }

    fn clone_box(&self) -> Box<dyn Engine> {
        Box::new(*self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DieselEngine;

impl Engine for DieselEngine {
    fn engine_type(&self) -> &str {
        "Diesel Engine"
    }

    fn clone_box(&self) -> Box<dyn Engine> {
        Box::new(*self)
    }
}

/// Named selector for the engines this crate ships.
///
/// Used where an engine has to be picked by name: the `engine` key of a
/// car description file and the `--engine` flag of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Sport,
    Diesel,
}

impl EngineKind {
    /// Instantiates the engine this kind names.
    pub fn create(self) -> Box<dyn Engine> {
        match self {
            EngineKind::Sport => Box::new(SportEngine),
            EngineKind::Diesel => Box::new(DieselEngine),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Sport => write!(f, "sport"),
            EngineKind::Diesel => write!(f, "diesel"),
        }
    }
}

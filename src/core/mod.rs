// Declares the domain values of the crate. Everything in here is immutable
// once created; staging and validation live in `crate::builders`.

// `car` module:
// The validated `Car` value, its accessors and its one-line summary.
pub mod car;

// `config` module:
// `CarSpec`, a car description loaded from a TOML file and staged onto a
// `CarBuilder`.
pub mod config;

// `engine` module:
// The `Engine` capability, the two shipped engines and the `EngineKind`
// selector used by config files and the CLI.
pub mod engine;

pub mod error;

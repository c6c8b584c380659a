//! Fluent construction of immutable cars with a pluggable engine.
//!
//! Stage values on a [`crate::builders::car::CarBuilder`], then call `build()` to get
//! a validated [`crate::core::car::Car`] or a [`crate::core::error::BuildError`].

pub mod builders;
pub mod core;
pub mod utils;

#[cfg(test)]
mod tests;

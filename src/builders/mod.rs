// Declares the staging objects of the crate.

// `car` module:
// `CarBuilder` accumulates seats, engine and feature flags through chained
// setters and turns them into an immutable `Car` in `build()`, which is the
// only place construction rules are enforced.
pub mod car;

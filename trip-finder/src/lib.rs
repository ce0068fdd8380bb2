//! Train trip query engine.
//!
//! Answers: "given a departure station, an arrival station, and a
//! ranking criterion, what are the best 3 matching trips?" The catalog
//! is loaded once from a JSON file; each query validates its input,
//! filters by station pair, ranks by the chosen criterion, and returns
//! at most three trips.

pub mod catalog;
pub mod domain;
pub mod query;

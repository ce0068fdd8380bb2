//! The trip query pipeline.
//!
//! This module answers the core question: given a departure station, an
//! arrival station, and a ranking criterion, which are the best
//! matching trips? The pipeline is validation, then catalog filtering,
//! then a stable ranking, then truncation to the top three.

mod engine;
mod rank;
mod validate;

pub use engine::{MAX_RESULTS, QueryError, find_trips};
pub use rank::rank_trips;
pub use validate::{Query, ValidationError};

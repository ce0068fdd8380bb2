//! Domain types for the trip finder.
//!
//! This module contains the core domain model types that represent
//! validated trip data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod criterion;
mod station;
mod time;
mod trip;

pub use criterion::{Criterion, UnsupportedCriterion};
pub use station::{InvalidStationId, StationId};
pub use time::{TimeError, TimeOfDay};
pub use trip::Trip;

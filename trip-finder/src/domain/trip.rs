//! The trip record.

use std::fmt;

use super::{StationId, TimeOfDay};

/// One scheduled train run between two stations.
///
/// Immutable once loaded from the catalog. Times are daily times of
/// day; a trip whose arrival time precedes its departure time arrives
/// the following calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Opaque trip identifier.
    pub id: u32,

    /// Station the trip departs from.
    pub departure_station: StationId,

    /// Station the trip arrives at.
    pub arrival_station: StationId,

    /// Fare for the trip. Never negative; the loader rejects records
    /// with negative prices.
    pub price: f64,

    /// Daily departure time.
    pub departure_time: TimeOfDay,

    /// Daily arrival time.
    pub arrival_time: TimeOfDay,
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Train ID: {}, Departure station ID: {}, Arrival station ID: {}, Price: {}, Departure time: {}, Arrival time: {}.",
            self.id,
            self.departure_station,
            self.arrival_station,
            self.price,
            self.departure_time,
            self.arrival_time
        )
    }
}

//! In-memory trip catalog.
//!
//! The catalog is loaded once at program start and is read-only for the
//! lifetime of every query. Lookups are linear scans; catalogs are
//! small and no index is kept.

mod load;

pub use load::CatalogError;

use crate::domain::{StationId, Trip};

/// An ordered, read-only collection of trips.
#[derive(Debug, Clone, Default)]
pub struct TripCatalog {
    trips: Vec<Trip>,
}

impl TripCatalog {
    /// Create a catalog from already-validated trips.
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    /// Returns the number of trips in the catalog.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns true if the catalog holds no trips.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Returns every trip in catalog order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Returns every trip running from `departure` to `arrival`, in
    /// catalog order.
    ///
    /// An empty result is valid: it means no trip serves that station
    /// pair. The returned trips are owned copies, so callers may sort
    /// them freely without touching catalog storage.
    pub fn filter(&self, departure: StationId, arrival: StationId) -> Vec<Trip> {
        self.trips
            .iter()
            .filter(|trip| {
                trip.departure_station == departure && trip.arrival_station == arrival
            })
            .cloned()
            .collect()
    }
}

//! JSON catalog loading.
//!
//! The data file is a JSON array of trip records with times serialized
//! as "HH:MM:SS" strings. Records deserialize into a transient wire
//! shape and are then converted into domain [`Trip`] values; the wire
//! shape never leaves this module.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{TimeError, TimeOfDay, Trip};

use super::TripCatalog;

/// Errors from loading the trip catalog.
///
/// Any of these means the catalog is unavailable: the current query
/// fails as a whole, with no retry and no partial result.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading the data file failed
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid JSON array of trip records
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record carries an unparsable time string
    #[error("trip {trip}: invalid {field} time: {source}")]
    InvalidTime {
        trip: u32,
        field: &'static str,
        #[source]
        source: TimeError,
    },

    /// A record carries a negative price
    #[error("trip {trip}: price must be non-negative")]
    NegativePrice { trip: u32 },
}

/// Wire shape of one catalog record. Times stay strings here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripRecord {
    train_id: u32,
    departure_station_id: u32,
    arrival_station_id: u32,
    price: f64,
    departure_time: String,
    arrival_time: String,
}

impl TripRecord {
    /// Convert the wire record into a domain trip.
    fn into_trip(self) -> Result<Trip, CatalogError> {
        let departure_time =
            TimeOfDay::parse_hms(&self.departure_time).map_err(|source| {
                CatalogError::InvalidTime {
                    trip: self.train_id,
                    field: "departure",
                    source,
                }
            })?;

        let arrival_time =
            TimeOfDay::parse_hms(&self.arrival_time).map_err(|source| {
                CatalogError::InvalidTime {
                    trip: self.train_id,
                    field: "arrival",
                    source,
                }
            })?;

        if self.price < 0.0 {
            return Err(CatalogError::NegativePrice {
                trip: self.train_id,
            });
        }

        Ok(Trip {
            id: self.train_id,
            departure_station: self.departure_station_id.into(),
            arrival_station: self.arrival_station_id.into(),
            price: self.price,
            departure_time,
            arrival_time,
        })
    }
}

impl TripCatalog {
    /// Load a catalog from a JSON file.
    ///
    /// The file must contain a JSON array of records shaped like:
    ///
    /// ```json
    /// {
    ///   "trainId": 1,
    ///   "departureStationId": 1,
    ///   "arrivalStationId": 2,
    ///   "price": 50.0,
    ///   "departureTime": "08:00:00",
    ///   "arrivalTime": "10:00:00"
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<TripRecord> = serde_json::from_str(&data)?;

        let trips = records
            .into_iter()
            .map(TripRecord::into_trip)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(trips = trips.len(), path = %path.display(), "loaded trip catalog");

        Ok(TripCatalog::new(trips))
    }
}

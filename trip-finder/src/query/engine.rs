//! Query orchestration: validate, filter, rank, truncate.

use tracing::debug;

use crate::catalog::{CatalogError, TripCatalog};
use crate::domain::Trip;

use super::rank::rank_trips;
use super::validate::{Query, ValidationError};

/// Maximum number of trips a query returns.
pub const MAX_RESULTS: usize = 3;

/// Errors from running a trip query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// User input failed validation; correctable, no retry here
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The catalog could not be read or parsed; fatal to the query
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),
}

/// Find the best trips between two stations.
///
/// Validates the raw input, filters the catalog to trips running from
/// the departure station to the arrival station, ranks them ascending
/// by the criterion, and returns at most [`MAX_RESULTS`] trips.
///
/// No matching trips is not an error: the result is simply empty. The
/// catalog is never mutated, so identical calls against the same
/// catalog yield identical results.
///
/// # Examples
///
/// ```
/// use trip_finder::catalog::TripCatalog;
/// use trip_finder::domain::{TimeOfDay, Trip};
/// use trip_finder::query::find_trips;
///
/// let catalog = TripCatalog::new(vec![Trip {
///     id: 1,
///     departure_station: 10.into(),
///     arrival_station: 20.into(),
///     price: 50.0,
///     departure_time: TimeOfDay::parse_hms("08:00:00").unwrap(),
///     arrival_time: TimeOfDay::parse_hms("10:00:00").unwrap(),
/// }]);
///
/// let trips = find_trips(&catalog, "10", "20", "price").unwrap();
/// assert_eq!(trips.len(), 1);
///
/// // An unknown station pair matches nothing, which is not an error
/// let trips = find_trips(&catalog, "20", "10", "price").unwrap();
/// assert!(trips.is_empty());
/// ```
pub fn find_trips(
    catalog: &TripCatalog,
    raw_departure: &str,
    raw_arrival: &str,
    raw_criterion: &str,
) -> Result<Vec<Trip>, QueryError> {
    let query = Query::parse(raw_departure, raw_arrival, raw_criterion)?;

    let matching = catalog.filter(query.departure, query.arrival);
    debug!(
        departure = %query.departure,
        arrival = %query.arrival,
        matches = matching.len(),
        "filtered catalog"
    );

    let mut ranked = rank_trips(matching, query.criterion);
    ranked.truncate(MAX_RESULTS);

    Ok(ranked)
}

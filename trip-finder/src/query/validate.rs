//! Query input validation.
//!
//! Raw user input arrives as three strings. A [`Query`] is only
//! constructed after every check passes, so the rest of the pipeline
//! never sees unvalidated input.

use crate::domain::{Criterion, InvalidStationId, StationId, UnsupportedCriterion};

/// Why raw query input was rejected.
///
/// Checks run in a fixed order and the first failure wins: empty
/// departure station, empty arrival station, criterion, departure
/// station parse, arrival station parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The departure station string was empty
    #[error("empty departure station")]
    EmptyDepartureStation,

    /// The arrival station string was empty
    #[error("empty arrival station")]
    EmptyArrivalStation,

    /// The criterion string is not one of the recognized values
    #[error(transparent)]
    UnsupportedCriterion(#[from] UnsupportedCriterion),

    /// The departure station string is not a non-negative integer
    #[error("bad departure station input: {0}")]
    BadDepartureStation(InvalidStationId),

    /// The arrival station string is not a non-negative integer
    #[error("bad arrival station input: {0}")]
    BadArrivalStation(InvalidStationId),
}

/// A validated trip query.
///
/// Station ids are not checked against any registry: a query for a
/// station pair no trip serves is valid and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Station to depart from.
    pub departure: StationId,

    /// Station to arrive at.
    pub arrival: StationId,

    /// Key to rank the matching trips by.
    pub criterion: Criterion,
}

impl Query {
    /// Validate raw input and build a query.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_finder::domain::Criterion;
    /// use trip_finder::query::{Query, ValidationError};
    ///
    /// let query = Query::parse("1", "2", "price").unwrap();
    /// assert_eq!(query.criterion, Criterion::Price);
    ///
    /// // The first failing check wins
    /// let err = Query::parse("", "x", "fastest").unwrap_err();
    /// assert_eq!(err, ValidationError::EmptyDepartureStation);
    /// ```
    pub fn parse(
        raw_departure: &str,
        raw_arrival: &str,
        raw_criterion: &str,
    ) -> Result<Self, ValidationError> {
        if raw_departure.is_empty() {
            return Err(ValidationError::EmptyDepartureStation);
        }

        if raw_arrival.is_empty() {
            return Err(ValidationError::EmptyArrivalStation);
        }

        let criterion = Criterion::parse(raw_criterion)?;

        let departure =
            StationId::parse(raw_departure).map_err(ValidationError::BadDepartureStation)?;

        let arrival =
            StationId::parse(raw_arrival).map_err(ValidationError::BadArrivalStation)?;

        Ok(Query {
            departure,
            arrival,
            criterion,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn criterion_literal() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["price", "departure-time", "arrival-time"])
    }

    proptest! {
        /// Any pair of non-negative integers with a recognized criterion
        /// parses into a query carrying exactly those values
        #[test]
        fn valid_triple_parses(
            dep in any::<u32>(),
            arr in any::<u32>(),
            criterion in criterion_literal(),
        ) {
            let query =
                Query::parse(&dep.to_string(), &arr.to_string(), criterion).unwrap();

            prop_assert_eq!(query.departure.as_u32(), dep);
            prop_assert_eq!(query.arrival.as_u32(), arr);
            prop_assert_eq!(query.criterion.as_str(), criterion);
        }

        /// An empty departure station always wins, whatever else is wrong
        #[test]
        fn empty_departure_always_first(arr in "\\PC*", criterion in "\\PC*") {
            let err = Query::parse("", &arr, &criterion).unwrap_err();
            prop_assert_eq!(err, ValidationError::EmptyDepartureStation);
        }

        /// A non-empty departure with an empty arrival always reports the
        /// empty arrival
        #[test]
        fn empty_arrival_always_second(dep in "\\PC+", criterion in "\\PC*") {
            let err = Query::parse(&dep, "", &criterion).unwrap_err();
            prop_assert_eq!(err, ValidationError::EmptyArrivalStation);
        }
    }
}

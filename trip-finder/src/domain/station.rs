//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque non-negative station identifier.
///
/// Station ids are catalog keys. They are not checked against any
/// station registry: any non-negative integer is acceptable, including
/// ids no trip in the catalog mentions.
///
/// # Examples
///
/// ```
/// use trip_finder::domain::StationId;
///
/// let id = StationId::parse("42").unwrap();
/// assert_eq!(id.as_u32(), 42);
///
/// // Negative and non-numeric input is rejected
/// assert!(StationId::parse("-1").is_err());
/// assert!(StationId::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(u32);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be a non-negative integer.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "station id cannot be empty",
            });
        }

        s.parse::<u32>().map(StationId).map_err(|_| InvalidStationId {
            reason: "must be a non-negative integer",
        })
    }

    /// Returns the numeric id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for StationId {
    fn from(id: u32) -> Self {
        StationId(id)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any u32 roundtrips through its decimal string
        #[test]
        fn roundtrip(id in any::<u32>()) {
            let parsed = StationId::parse(&id.to_string()).unwrap();
            prop_assert_eq!(parsed.as_u32(), id);
        }

        /// Negative numbers are always rejected
        #[test]
        fn negative_rejected(id in 1i64..=i64::from(u32::MAX)) {
            let negative = format!("-{}", id);
            prop_assert!(StationId::parse(&negative).is_err());
        }

        /// Alphabetic strings are always rejected
        #[test]
        fn alphabetic_rejected(s in "[a-zA-Z]{1,10}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}

//! Ranking criterion for trip queries.

use std::fmt;

/// Error returned when a criterion string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported criteria: {value:?}")]
pub struct UnsupportedCriterion {
    value: String,
}

/// The key a query ranks trips by.
///
/// This closed enum is the single source of truth for the recognized
/// criteria; callers that need the raw literals (prompts, help text)
/// go through [`Criterion::ALL`] and [`Criterion::as_str`].
///
/// # Examples
///
/// ```
/// use trip_finder::domain::Criterion;
///
/// assert_eq!(Criterion::parse("price").unwrap(), Criterion::Price);
/// assert_eq!(Criterion::Price.as_str(), "price");
///
/// // Anything else is rejected
/// assert!(Criterion::parse("fastest").is_err());
/// assert!(Criterion::parse("Price").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Ascending fare.
    Price,
    /// Earliest departure first.
    DepartureTime,
    /// Earliest arrival first.
    ArrivalTime,
}

impl Criterion {
    /// Every recognized criterion, in prompt order.
    pub const ALL: [Criterion; 3] = [
        Criterion::Price,
        Criterion::DepartureTime,
        Criterion::ArrivalTime,
    ];

    /// Parse a criterion from its literal value.
    ///
    /// Exactly `"price"`, `"departure-time"`, and `"arrival-time"` are
    /// recognized; matching is case-sensitive.
    pub fn parse(s: &str) -> Result<Self, UnsupportedCriterion> {
        match s {
            "price" => Ok(Criterion::Price),
            "departure-time" => Ok(Criterion::DepartureTime),
            "arrival-time" => Ok(Criterion::ArrivalTime),
            other => Err(UnsupportedCriterion {
                value: other.to_string(),
            }),
        }
    }

    /// Returns the canonical literal for this criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Price => "price",
            Criterion::DepartureTime => "departure-time",
            Criterion::ArrivalTime => "arrival-time",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

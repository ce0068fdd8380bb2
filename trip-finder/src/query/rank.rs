//! Trip ranking.
//!
//! Orders trips ascending by the selected criterion. Ordering is
//! stable: trips with equal keys keep their relative catalog order, so
//! the same query always presents ties the same way.

use std::cmp::Ordering;

use crate::domain::{Criterion, Trip};

/// Compare two trips by the given criterion.
///
/// Prices compare with `f64::total_cmp`; catalog prices are finite and
/// non-negative, so this coincides with numeric order.
fn compare_by(criterion: Criterion, a: &Trip, b: &Trip) -> Ordering {
    match criterion {
        Criterion::Price => a.price.total_cmp(&b.price),
        Criterion::DepartureTime => a.departure_time.cmp(&b.departure_time),
        Criterion::ArrivalTime => a.arrival_time.cmp(&b.arrival_time),
    }
}

/// Rank trips ascending by `criterion`.
///
/// Returns a permutation of the input. The sort is stable, so trips
/// with equal keys retain their relative input order.
pub fn rank_trips(mut trips: Vec<Trip>, criterion: Criterion) -> Vec<Trip> {
    trips.sort_by(|a, b| compare_by(criterion, a, b));
    trips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeOfDay;

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hms(s).unwrap()
    }

    fn trip(id: u32, price: f64, departure: &str, arrival: &str) -> Trip {
        Trip {
            id,
            departure_station: 1.into(),
            arrival_station: 2.into(),
            price,
            departure_time: time(departure),
            arrival_time: time(arrival),
        }
    }

    fn ids(trips: &[Trip]) -> Vec<u32> {
        trips.iter().map(|t| t.id).collect()
    }

    #[test]
    fn rank_by_price() {
        let trips = vec![
            trip(1, 50.0, "08:00:00", "10:00:00"),
            trip(2, 30.0, "09:00:00", "11:00:00"),
            trip(3, 40.0, "07:00:00", "09:00:00"),
        ];

        let ranked = rank_trips(trips, Criterion::Price);

        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn rank_by_departure_time() {
        let trips = vec![
            trip(1, 50.0, "08:00:00", "10:00:00"),
            trip(2, 30.0, "09:00:00", "11:00:00"),
            trip(3, 40.0, "07:00:00", "09:00:00"),
        ];

        let ranked = rank_trips(trips, Criterion::DepartureTime);

        assert_eq!(ids(&ranked), vec![3, 1, 2]);
    }

    #[test]
    fn rank_by_arrival_time() {
        let trips = vec![
            trip(1, 50.0, "08:00:00", "10:30:00"),
            trip(2, 30.0, "09:00:00", "11:00:00"),
            trip(3, 40.0, "07:00:00", "09:45:00"),
        ];

        let ranked = rank_trips(trips, Criterion::ArrivalTime);

        assert_eq!(ids(&ranked), vec![3, 1, 2]);
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let trips = vec![
            trip(1, 30.0, "10:00:00", "12:00:00"),
            trip(2, 30.0, "08:00:00", "10:00:00"),
            trip(3, 10.0, "09:00:00", "11:00:00"),
            trip(4, 30.0, "07:00:00", "09:00:00"),
        ];

        let ranked = rank_trips(trips, Criterion::Price);

        // Ties at 30.0 stay in input order: 1, 2, 4
        assert_eq!(ids(&ranked), vec![3, 1, 2, 4]);
    }

    #[test]
    fn equal_times_keep_input_order() {
        let trips = vec![
            trip(5, 20.0, "08:00:00", "10:00:00"),
            trip(6, 10.0, "08:00:00", "10:00:00"),
            trip(7, 30.0, "08:00:00", "10:00:00"),
        ];

        let by_departure = rank_trips(trips.clone(), Criterion::DepartureTime);
        assert_eq!(ids(&by_departure), vec![5, 6, 7]);

        let by_arrival = rank_trips(trips, Criterion::ArrivalTime);
        assert_eq!(ids(&by_arrival), vec![5, 6, 7]);
    }

    #[test]
    fn empty_and_single() {
        assert!(rank_trips(vec![], Criterion::Price).is_empty());

        let one = vec![trip(1, 10.0, "08:00:00", "10:00:00")];
        assert_eq!(ids(&rank_trips(one, Criterion::Price)), vec![1]);
    }

    #[test]
    fn overnight_arrival_compares_as_raw_time_of_day() {
        // Trip 1 arrives "the next day" at 01:00, but ranking compares
        // raw times of day, so 01:00:00 sorts before 23:30:00.
        let trips = vec![
            trip(1, 10.0, "23:00:00", "01:00:00"),
            trip(2, 10.0, "22:00:00", "23:30:00"),
        ];

        let ranked = rank_trips(trips, Criterion::ArrivalTime);

        assert_eq!(ids(&ranked), vec![1, 2]);
    }
}

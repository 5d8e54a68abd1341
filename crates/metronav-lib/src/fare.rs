//! Fare bands and travel-time estimation.
//!
//! Both are pure functions of an already computed path. Fares are charged on
//! running distance so the interchange penalty never changes the price.

use serde::Serialize;

/// Upper bound of each fare band (inclusive) and its price.
const FARE_BANDS: [(f64, u32); 5] = [(2.0, 10), (5.0, 20), (12.0, 30), (21.0, 40), (32.0, 50)];

/// Price charged beyond the last band.
const MAX_FARE: u32 = 60;

/// Fare for a journey of `distance` units.
///
/// Returns `None` for zero, negative or non-finite distances.
pub fn fare_for_distance(distance: f64) -> Option<u32> {
    if !distance.is_finite() || distance <= 0.0 {
        return None;
    }
    let fare = FARE_BANDS
        .iter()
        .find(|(limit, _)| distance <= *limit)
        .map(|(_, fare)| *fare)
        .unwrap_or(MAX_FARE);
    Some(fare)
}

/// Parameters for the travel-time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelTimeModel {
    /// Average train speed in distance units per hour.
    pub average_speed_kmh: f64,
    /// Dwell time charged for every stop along the way, in minutes.
    pub stop_dwell_minutes: f64,
    /// Walking and waiting time per line change, in minutes.
    pub interchange_minutes: f64,
}

impl Default for TravelTimeModel {
    fn default() -> Self {
        Self {
            average_speed_kmh: 32.0,
            stop_dwell_minutes: 0.5,
            interchange_minutes: 5.0,
        }
    }
}

impl TravelTimeModel {
    /// Estimated journey time in minutes.
    pub fn estimate_minutes(&self, distance: f64, stops: usize, interchanges: usize) -> f64 {
        let running = if self.average_speed_kmh > 0.0 {
            distance / self.average_speed_kmh * 60.0
        } else {
            0.0
        };
        running
            + stops as f64 * self.stop_dwell_minutes
            + interchanges as f64 * self.interchange_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_bands_are_inclusive_upper_bounds() {
        assert_eq!(fare_for_distance(0.5), Some(10));
        assert_eq!(fare_for_distance(2.0), Some(10));
        assert_eq!(fare_for_distance(2.01), Some(20));
        assert_eq!(fare_for_distance(12.0), Some(30));
        assert_eq!(fare_for_distance(21.0), Some(40));
        assert_eq!(fare_for_distance(32.0), Some(50));
        assert_eq!(fare_for_distance(32.5), Some(60));
    }

    #[test]
    fn fare_rejects_empty_journeys() {
        assert_eq!(fare_for_distance(0.0), None);
        assert_eq!(fare_for_distance(-3.0), None);
        assert_eq!(fare_for_distance(f64::NAN), None);
    }

    #[test]
    fn travel_time_adds_running_dwell_and_interchanges() {
        let model = TravelTimeModel::default();
        // 16 units at 32/h = 30 min, 4 stops = 2 min, 1 change = 5 min.
        let minutes = model.estimate_minutes(16.0, 4, 1);
        assert!((minutes - 37.0).abs() < 1e-9);
    }

    #[test]
    fn zero_speed_ignores_running_time() {
        let model = TravelTimeModel {
            average_speed_kmh: 0.0,
            ..TravelTimeModel::default()
        };
        assert_eq!(model.estimate_minutes(10.0, 2, 0), 1.0);
    }
}

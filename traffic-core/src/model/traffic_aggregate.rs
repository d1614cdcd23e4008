use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{observation_ops as ops, Observation};

/// the averaged traffic conditions for a road segment which feed the pollutant models.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrafficAggregate {
    /// latest observation time in the aggregated set
    pub most_recent: NaiveDateTime,
    pub avg_vehicles: f64,
    pub avg_speed: f64,
    pub avg_congestion: f64,
}

impl TrafficAggregate {
    /// aggregates every observation in the slice, without any recency window.
    /// returns None for an empty slice.
    pub fn from_observations(observations: &[Observation]) -> Option<TrafficAggregate> {
        let most_recent = ops::most_recent_timestamp(observations)?;
        Some(TrafficAggregate {
            most_recent,
            avg_vehicles: ops::mean_vehicle_count(observations),
            avg_speed: ops::mean_average_speed(observations),
            avg_congestion: ops::mean_congestion_level(observations),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDateTime};

    use super::TrafficAggregate;
    use crate::model::Observation;

    #[test]
    fn test_aggregate_sample_segment() {
        let now = NaiveDateTime::parse_from_str("2024-03-01 12:00:00", "%Y-%m-%d %H:%M:%S")
            .expect("test invariant failed: could not parse timestamp");
        let observations = vec![
            Observation::new(now - Duration::hours(2), "A8-KM125-126", 85, Some(70.5), Some(0.65)),
            Observation::new(now, "A8-KM125-126", 65, Some(95.0), None),
            Observation::new(now - Duration::hours(1), "A8-KM125-126", 120, None, Some(0.85)),
        ];
        let agg = TrafficAggregate::from_observations(&observations)
            .expect("non-empty input should aggregate");
        assert_eq!(agg.most_recent, now);
        assert!((agg.avg_vehicles - 90.0).abs() < 1e-12);
        assert!((agg.avg_speed - 82.75).abs() < 1e-12);
        assert!((agg.avg_congestion - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(TrafficAggregate::from_observations(&[]).is_none());
    }
}

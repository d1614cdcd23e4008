use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::congestion;

/// a single traffic reading for a road segment at a point in time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Observation {
    /// time the reading was taken
    pub timestamp: NaiveDateTime,
    /// opaque identifier for the stretch of roadway observed
    pub road_segment_id: String,
    /// vehicles observed during the measurement interval
    pub vehicle_count: u32,
    /// average speed in km/h, if measured
    pub average_speed: Option<f64>,
    /// normalized [0, 1] congestion, 0 is free-flow and 1 is fully congested
    pub congestion_level: Option<f64>,
}

impl Observation {
    pub fn new(
        timestamp: NaiveDateTime,
        road_segment_id: &str,
        vehicle_count: u32,
        average_speed: Option<f64>,
        congestion_level: Option<f64>,
    ) -> Observation {
        Observation {
            timestamp,
            road_segment_id: road_segment_id.to_string(),
            vehicle_count,
            average_speed,
            congestion_level,
        }
    }

    /// back-fills the congestion level from vehicle count and speed.
    ///
    /// a congestion level supplied by the caller is never replaced, and no value
    /// is derived when the average speed is missing.
    pub fn with_estimated_congestion(self) -> Observation {
        match (self.congestion_level, self.average_speed) {
            (None, Some(speed)) => {
                let congestion_level =
                    congestion::estimate_congestion(self.vehicle_count, speed);
                Observation {
                    congestion_level: Some(congestion_level),
                    ..self
                }
            }
            _ => self,
        }
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use traffic_core::Observation;

/// an observation as held by a store, along with the id the store assigned to it.
/// this is also the row layout of the observations CSV file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    pub id: u64,
    pub timestamp: NaiveDateTime,
    pub road_segment_id: String,
    pub vehicle_count: u32,
    pub average_speed: Option<f64>,
    pub congestion_level: Option<f64>,
}

impl ObservationRecord {
    pub fn new(id: u64, observation: Observation) -> ObservationRecord {
        let Observation {
            timestamp,
            road_segment_id,
            vehicle_count,
            average_speed,
            congestion_level,
        } = observation;
        ObservationRecord {
            id,
            timestamp,
            road_segment_id,
            vehicle_count,
            average_speed,
            congestion_level,
        }
    }
}

impl From<ObservationRecord> for Observation {
    fn from(value: ObservationRecord) -> Self {
        Observation {
            timestamp: value.timestamp,
            road_segment_id: value.road_segment_id,
            vehicle_count: value.vehicle_count,
            average_speed: value.average_speed,
            congestion_level: value.congestion_level,
        }
    }
}

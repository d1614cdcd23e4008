use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// hourly pollutant rates derived for a road segment from its observations.
/// computed on request and never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmissionsEstimate {
    pub road_segment_id: String,
    /// most recent observation time, or the time of the request when there was no data
    pub timestamp: NaiveDateTime,
    pub co2_kg_per_hour: f64,
    pub nox_grams_per_hour: f64,
    pub particulate_matter_grams_per_hour: f64,
    /// mean vehicle count, truncated toward zero
    pub vehicle_count: u32,
    pub average_speed: f64,
    pub congestion_level: f64,
}

impl EmissionsEstimate {
    /// the "no data" estimate: every numeric field is zero.
    pub fn empty(road_segment_id: &str, timestamp: NaiveDateTime) -> EmissionsEstimate {
        EmissionsEstimate {
            road_segment_id: road_segment_id.to_string(),
            timestamp,
            co2_kg_per_hour: 0.0,
            nox_grams_per_hour: 0.0,
            particulate_matter_grams_per_hour: 0.0,
            vehicle_count: 0,
            average_speed: 0.0,
            congestion_level: 0.0,
        }
    }
}

use chrono::NaiveDateTime;

use super::Pollutant;
use crate::model::{observation_ops, EmissionsEstimate, Observation, TrafficAggregate};

/// estimates hourly CO2, NOx and PM emissions for a road segment from all of its
/// observations.
///
/// # Arguments
/// * `road_segment_id` - segment the observations belong to
/// * `observations` - every stored observation for the segment, in any order
///
/// # Result
///
/// an estimate over the averaged observations. with no observations, a zeroed
/// estimate stamped with the current local time.
pub fn estimate_emissions(road_segment_id: &str, observations: &[Observation]) -> EmissionsEstimate {
    match TrafficAggregate::from_observations(observations) {
        Some(aggregate) => estimate_from_aggregate(road_segment_id, &aggregate),
        None => EmissionsEstimate::empty(road_segment_id, now()),
    }
}

/// runs the three pollutant models over already-aggregated traffic conditions.
pub fn estimate_from_aggregate(
    road_segment_id: &str,
    aggregate: &TrafficAggregate,
) -> EmissionsEstimate {
    EmissionsEstimate {
        road_segment_id: road_segment_id.to_string(),
        timestamp: aggregate.most_recent,
        co2_kg_per_hour: Pollutant::Co2.rate(aggregate),
        nox_grams_per_hour: Pollutant::Nox.rate(aggregate),
        particulate_matter_grams_per_hour: Pollutant::ParticulateMatter.rate(aggregate),
        vehicle_count: aggregate.avg_vehicles as u32,
        average_speed: aggregate.avg_speed,
        congestion_level: aggregate.avg_congestion,
    }
}

/// mean congestion level over the observations that carry one. 0.0 when there are
/// no observations or none has a congestion level.
pub fn average_congestion(observations: &[Observation]) -> f64 {
    observation_ops::mean_congestion_level(observations)
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

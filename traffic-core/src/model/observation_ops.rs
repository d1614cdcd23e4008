//! aggregation primitives shared by the congestion and emissions queries.
use chrono::NaiveDateTime;

use super::Observation;

/// arithmetic mean over the present values. absent values are skipped rather than
/// counted as zero, and the result is 0.0 when no value is present.
pub fn mean_of<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// mean vehicle count across all observations, or 0.0 for an empty slice.
pub fn mean_vehicle_count(observations: &[Observation]) -> f64 {
    mean_of(observations.iter().map(|o| Some(o.vehicle_count as f64)))
}

/// mean of the measured speeds, excluding observations without a speed.
pub fn mean_average_speed(observations: &[Observation]) -> f64 {
    mean_of(observations.iter().map(|o| o.average_speed))
}

/// mean of the congestion levels, excluding observations without one.
pub fn mean_congestion_level(observations: &[Observation]) -> f64 {
    mean_of(observations.iter().map(|o| o.congestion_level))
}

/// latest timestamp in the collection, if any.
pub fn most_recent_timestamp(observations: &[Observation]) -> Option<NaiveDateTime> {
    observations.iter().map(|o| o.timestamp).max()
}

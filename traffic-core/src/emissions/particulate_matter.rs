//! particulate matter emissions in grams per hour. PM is mostly a diesel concern,
//! and higher on slow urban roads.
use super::DIESEL_SHARE;

pub const BASE_GRAMS_PER_VEHICLE: f64 = 0.1;

/// diesel vehicles emit roughly this multiple of the petrol PM rate
pub const DIESEL_MULTIPLIER: f64 = 5.0;

/// congestion above this level marks the segment as urban
pub const URBAN_CONGESTION_THRESHOLD: f64 = 0.5;

pub fn urban_factor(congestion_level: f64) -> f64 {
    if congestion_level > URBAN_CONGESTION_THRESHOLD {
        1.5
    } else {
        1.0
    }
}

pub fn speed_factor(average_speed: f64) -> f64 {
    if average_speed < 30.0 {
        1.8
    } else {
        1.0
    }
}

pub fn grams_per_hour(vehicle_count: f64, average_speed: f64, congestion_level: f64) -> f64 {
    let diesel = BASE_GRAMS_PER_VEHICLE * DIESEL_SHARE * vehicle_count * DIESEL_MULTIPLIER;
    let petrol = BASE_GRAMS_PER_VEHICLE * (1.0 - DIESEL_SHARE) * vehicle_count;
    (diesel + petrol) * speed_factor(average_speed) * urban_factor(congestion_level)
}

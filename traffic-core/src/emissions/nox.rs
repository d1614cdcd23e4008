//! NOx emissions in grams per hour. NOx is sensitive to the acceleration events of
//! congested traffic and is dominated by the diesel share of the fleet.
use super::DIESEL_SHARE;

pub const BASE_GRAMS_PER_VEHICLE: f64 = 1.5;

/// diesel vehicles emit roughly this multiple of the petrol NOx rate
pub const DIESEL_MULTIPLIER: f64 = 3.0;

pub fn speed_factor(average_speed: f64) -> f64 {
    if average_speed < 20.0 {
        2.0
    } else if average_speed < 60.0 {
        1.5 - (average_speed - 20.0) * 0.016
    } else {
        1.0
    }
}

pub fn congestion_factor(congestion_level: f64) -> f64 {
    1.0 + congestion_level * 1.5
}

pub fn grams_per_hour(vehicle_count: f64, average_speed: f64, congestion_level: f64) -> f64 {
    let diesel = BASE_GRAMS_PER_VEHICLE * DIESEL_SHARE * vehicle_count * DIESEL_MULTIPLIER;
    let petrol = BASE_GRAMS_PER_VEHICLE * (1.0 - DIESEL_SHARE) * vehicle_count;
    (diesel + petrol) * speed_factor(average_speed) * congestion_factor(congestion_level)
}

//! CO2 emissions in kg per hour. emissions grow with vehicle count, are higher in
//! stop-and-go traffic and at very high speeds, and grow with congestion.

/// kg CO2 per vehicle per hour at optimal speed
pub const BASE_KG_PER_VEHICLE: f64 = 2.5;

/// U-shaped speed efficiency curve. the 90 km/h and above branch is not capped.
pub fn speed_factor(average_speed: f64) -> f64 {
    if average_speed < 10.0 {
        2.0
    } else if average_speed < 60.0 {
        1.5 - (average_speed - 10.0) * 0.01
    } else if average_speed < 90.0 {
        1.0
    } else {
        1.0 + (average_speed - 90.0) * 0.02
    }
}

/// ranges over [1, 2] for congestion in [0, 1]
pub fn congestion_factor(congestion_level: f64) -> f64 {
    1.0 + congestion_level
}

pub fn kg_per_hour(vehicle_count: f64, average_speed: f64, congestion_level: f64) -> f64 {
    BASE_KG_PER_VEHICLE
        * vehicle_count
        * speed_factor(average_speed)
        * congestion_factor(congestion_level)
}

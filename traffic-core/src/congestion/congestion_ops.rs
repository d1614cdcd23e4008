/// vehicle count at which the count term saturates at 1.0
pub const SATURATION_VEHICLE_COUNT: f64 = 100.0;

/// speed in km/h at which the speed term reaches 0.0
pub const FREE_FLOW_SPEED: f64 = 130.0;

/// heuristic congestion level from vehicle count and average speed: higher counts
/// and lower speeds mean more congestion. both terms are clamped before they are
/// averaged, so for non-negative inputs the result lies in [0, 1].
///
/// # Arguments
/// * `vehicle_count` - vehicles observed in the measurement interval
/// * `average_speed` - average speed in km/h
///
/// # Returns
///
/// the congestion level in [0, 1]
pub fn estimate_congestion(vehicle_count: u32, average_speed: f64) -> f64 {
    let normalized_count = f64::min(1.0, vehicle_count as f64 / SATURATION_VEHICLE_COUNT);
    let normalized_speed = f64::max(0.0, 1.0 - average_speed / FREE_FLOW_SPEED);
    (normalized_count + normalized_speed) / 2.0
}

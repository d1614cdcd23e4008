//! checks applied to incoming observations before they reach a store.
use traffic_core::Observation;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("road segment id must not be empty")]
    EmptyRoadSegmentId,
    #[error("average speed must be a non-negative number, found {0}")]
    InvalidAverageSpeed(f64),
    #[error("congestion level must be within [0, 1], found {0}")]
    InvalidCongestionLevel(f64),
}

pub fn validate_observation(observation: &Observation) -> Result<(), ValidationError> {
    if observation.road_segment_id.trim().is_empty() {
        return Err(ValidationError::EmptyRoadSegmentId);
    }
    if let Some(speed) = observation.average_speed {
        if !speed.is_finite() || speed < 0.0 {
            return Err(ValidationError::InvalidAverageSpeed(speed));
        }
    }
    match observation.congestion_level {
        Some(c) if !(0.0..=1.0).contains(&c) => Err(ValidationError::InvalidCongestionLevel(c)),
        _ => Ok(()),
    }
}

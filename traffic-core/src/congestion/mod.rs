mod congestion_ops;

pub use congestion_ops::{estimate_congestion, FREE_FLOW_SPEED, SATURATION_VEHICLE_COUNT};

pub mod congestion;
pub mod emissions;
pub mod model;

pub use congestion::estimate_congestion;
pub use emissions::{average_congestion, estimate_emissions};
pub use model::{EmissionsEstimate, Observation, TrafficAggregate};

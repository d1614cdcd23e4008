mod emissions_estimate;
mod observation;
pub mod observation_ops;
mod traffic_aggregate;

pub use emissions_estimate::EmissionsEstimate;
pub use observation::Observation;
pub use traffic_aggregate::TrafficAggregate;

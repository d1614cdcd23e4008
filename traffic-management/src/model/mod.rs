mod observation_record;
pub mod seed;
pub mod service;
pub mod store;
mod traffic_error;
pub mod validation;

pub use observation_record::ObservationRecord;
pub use traffic_error::TrafficError;

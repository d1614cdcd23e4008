mod emissions_service;
mod traffic_service;

pub use emissions_service::EmissionsService;
pub use traffic_service::TrafficService;

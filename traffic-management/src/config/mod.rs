mod traffic_app_configuration;

pub use traffic_app_configuration::TrafficAppConfiguration;

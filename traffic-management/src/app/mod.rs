mod operation;
mod traffic_app;

pub use operation::TrafficOperation;
pub use traffic_app::TrafficApp;

pub mod co2;
mod emissions_ops;
pub mod nox;
pub mod particulate_matter;
mod pollutant;

pub use emissions_ops::{average_congestion, estimate_emissions, estimate_from_aggregate};
pub use pollutant::Pollutant;

/// share of the fleet assumed to run on diesel, used by the NOx and PM models
pub const DIESEL_SHARE: f64 = 0.4;

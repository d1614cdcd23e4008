use super::{co2, nox, particulate_matter};
use crate::model::TrafficAggregate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pollutant {
    /// carbon dioxide, kg per hour
    Co2,
    /// nitrogen oxides, grams per hour
    Nox,
    /// particulate matter, grams per hour
    ParticulateMatter,
}

impl Pollutant {
    pub const ALL: [Pollutant; 3] = [Pollutant::Co2, Pollutant::Nox, Pollutant::ParticulateMatter];

    /// hourly emission rate of this pollutant for the aggregated traffic conditions
    pub fn rate(&self, aggregate: &TrafficAggregate) -> f64 {
        let TrafficAggregate {
            avg_vehicles,
            avg_speed,
            avg_congestion,
            ..
        } = *aggregate;
        match self {
            Pollutant::Co2 => co2::kg_per_hour(avg_vehicles, avg_speed, avg_congestion),
            Pollutant::Nox => nox::grams_per_hour(avg_vehicles, avg_speed, avg_congestion),
            Pollutant::ParticulateMatter => {
                particulate_matter::grams_per_hour(avg_vehicles, avg_speed, avg_congestion)
            }
        }
    }
}

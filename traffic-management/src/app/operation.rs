use chrono::NaiveDateTime;
use clap::{value_parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::json;
use traffic_core::Observation;

use crate::{
    config::TrafficAppConfiguration,
    model::{
        seed,
        service::{EmissionsService, TrafficService},
        store::ObservationStore,
        TrafficError,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TrafficOperation {
    /// store a new observation, estimating its congestion level if not provided
    Ingest {
        #[arg(long)]
        road_segment_id: String,
        #[arg(long)]
        vehicle_count: u32,
        /// average speed in km/h
        #[arg(long)]
        average_speed: Option<f64>,
        /// congestion level in [0, 1]
        #[arg(long)]
        congestion_level: Option<f64>,
        /// time of the reading, e.g. 2024-03-01T08:00:00. defaults to now.
        #[arg(long, value_parser = value_parser!(NaiveDateTime))]
        timestamp: Option<NaiveDateTime>,
    },
    /// list stored observations, optionally for a single road segment
    List {
        #[arg(long)]
        road_segment_id: Option<String>,
    },
    /// list observations taken between two times, inclusive
    TimeRange {
        #[arg(long, value_parser = value_parser!(NaiveDateTime))]
        start: NaiveDateTime,
        #[arg(long, value_parser = value_parser!(NaiveDateTime))]
        end: NaiveDateTime,
    },
    /// list observations on a segment with congestion above a threshold
    CongestionPoints {
        #[arg(long)]
        road_segment_id: String,
        /// overrides the configured congestion threshold
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// mean congestion level of a road segment
    AverageCongestion {
        #[arg(long)]
        road_segment_id: String,
    },
    /// estimate hourly CO2, NOx and particulate matter emissions for a road segment
    Emissions {
        #[arg(long)]
        road_segment_id: String,
    },
    /// estimate emissions for every stored road segment
    EmissionsSummary,
    /// write sample observations if the store is empty
    Seed,
}

impl TrafficOperation {
    pub fn run<S: ObservationStore>(
        &self,
        store: S,
        conf: &TrafficAppConfiguration,
    ) -> Result<serde_json::Value, TrafficError> {
        match self {
            TrafficOperation::Ingest {
                road_segment_id,
                vehicle_count,
                average_speed,
                congestion_level,
                timestamp,
            } => {
                let timestamp = timestamp.unwrap_or_else(|| chrono::Local::now().naive_local());
                let observation = Observation::new(
                    timestamp,
                    road_segment_id,
                    *vehicle_count,
                    *average_speed,
                    *congestion_level,
                );
                let mut service = TrafficService::new(store);
                let record = service.save(observation)?;
                log::info!("stored observation {} for '{road_segment_id}'", record.id);
                Ok(serde_json::to_value(record)?)
            }
            TrafficOperation::List { road_segment_id } => {
                let service = TrafficService::new(store);
                let rows = match road_segment_id {
                    Some(id) => service.by_segment(id)?,
                    None => service.all()?,
                };
                Ok(serde_json::to_value(rows)?)
            }
            TrafficOperation::TimeRange { start, end } => {
                let service = TrafficService::new(store);
                let rows = service.by_time_range(start, end)?;
                Ok(serde_json::to_value(rows)?)
            }
            TrafficOperation::CongestionPoints {
                road_segment_id,
                threshold,
            } => {
                let threshold = threshold.unwrap_or(conf.congestion_threshold);
                let service = TrafficService::new(store);
                let rows = service.congestion_points(road_segment_id, threshold)?;
                Ok(serde_json::to_value(rows)?)
            }
            TrafficOperation::AverageCongestion { road_segment_id } => {
                let service = TrafficService::new(store);
                let average = service.average_congestion(road_segment_id)?;
                Ok(json!({
                    "road_segment_id": road_segment_id,
                    "average_congestion": average
                }))
            }
            TrafficOperation::Emissions { road_segment_id } => {
                let service = EmissionsService::new(&store);
                let estimate = service.estimate_for_segment(road_segment_id)?;
                Ok(serde_json::to_value(estimate)?)
            }
            TrafficOperation::EmissionsSummary => {
                let service = EmissionsService::new(&store);
                let estimates = service.estimate_all_segments()?;
                Ok(serde_json::to_value(estimates)?)
            }
            TrafficOperation::Seed => {
                let mut store = store;
                let seeded = seed::seed_if_empty(&mut store, chrono::Local::now().naive_local())?;
                Ok(json!({ "seeded": seeded }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::TrafficOperation;
    use crate::{
        config::TrafficAppConfiguration,
        model::{seed, store::InMemoryObservationStore},
    };

    fn mock_store() -> InMemoryObservationStore {
        let now = NaiveDateTime::parse_from_str("2024-03-01 12:00:00", "%Y-%m-%d %H:%M:%S")
            .expect("test invariant failed: could not parse timestamp");
        let mut store = InMemoryObservationStore::default();
        seed::seed_if_empty(&mut store, now)
            .expect("test invariant failed: could not seed store");
        store
    }

    #[test]
    fn test_congestion_points_uses_configured_threshold() {
        let op = TrafficOperation::CongestionPoints {
            road_segment_id: String::from("B27-KM45-46"),
            threshold: None,
        };
        let result = op
            .run(mock_store(), &TrafficAppConfiguration::default())
            .expect("operation should succeed");
        let rows = result.as_array().expect("result should be an array");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["vehicle_count"], 110);
    }

    #[test]
    fn test_average_congestion_output() {
        let op = TrafficOperation::AverageCongestion {
            road_segment_id: String::from("A8-KM125-126"),
        };
        let result = op
            .run(mock_store(), &TrafficAppConfiguration::default())
            .expect("operation should succeed");
        assert_eq!(result["road_segment_id"], "A8-KM125-126");
        let average = result["average_congestion"]
            .as_f64()
            .expect("average should be a number");
        assert!((average - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_ingest_backfills() {
        let op = TrafficOperation::Ingest {
            road_segment_id: String::from("B27-KM45-46"),
            vehicle_count: 50,
            average_speed: Some(65.0),
            congestion_level: None,
            timestamp: None,
        };
        let result = op
            .run(InMemoryObservationStore::default(), &TrafficAppConfiguration::default())
            .expect("operation should succeed");
        assert_eq!(result["id"], 1);
        let congestion = result["congestion_level"]
            .as_f64()
            .expect("congestion should be back-filled");
        assert!((congestion - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_emissions_summary() {
        let result = TrafficOperation::EmissionsSummary
            .run(mock_store(), &TrafficAppConfiguration::default())
            .expect("operation should succeed");
        let rows = result.as_array().expect("result should be an array");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["road_segment_id"], "A8-KM125-126");
    }
}

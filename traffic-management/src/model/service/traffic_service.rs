use chrono::NaiveDateTime;
use itertools::Itertools;
use traffic_core::Observation;

use crate::model::{store::ObservationStore, validation, ObservationRecord, TrafficError};

/// ingests and queries traffic observations held in some store.
pub struct TrafficService<S: ObservationStore> {
    store: S,
}

impl<S: ObservationStore> TrafficService<S> {
    pub fn new(store: S) -> TrafficService<S> {
        TrafficService { store }
    }

    /// validates an incoming observation, back-fills its congestion level when it
    /// was not supplied, and persists it.
    pub fn save(&mut self, observation: Observation) -> Result<ObservationRecord, TrafficError> {
        if let Err(e) = validation::validate_observation(&observation) {
            log::warn!(
                "rejected observation for segment '{}': {e}",
                observation.road_segment_id
            );
            return Err(e.into());
        }
        let supplied = observation.congestion_level.is_some();
        let observation = observation.with_estimated_congestion();
        if !supplied {
            log::debug!(
                "estimated congestion {:?} for segment '{}'",
                observation.congestion_level,
                observation.road_segment_id
            );
        }
        let record = self.store.save(observation)?;
        Ok(record)
    }

    pub fn all(&self) -> Result<Vec<ObservationRecord>, TrafficError> {
        Ok(self.store.list_all()?)
    }

    pub fn by_segment(&self, road_segment_id: &str) -> Result<Vec<ObservationRecord>, TrafficError> {
        Ok(self.store.list_by_segment(road_segment_id)?)
    }

    pub fn by_time_range(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<ObservationRecord>, TrafficError> {
        if start > end {
            return Err(TrafficError::InvalidTimeRange {
                start: *start,
                end: *end,
            });
        }
        Ok(self.store.list_by_time_range(start, end)?)
    }

    pub fn congestion_points(
        &self,
        road_segment_id: &str,
        threshold: f64,
    ) -> Result<Vec<ObservationRecord>, TrafficError> {
        Ok(self.store.congestion_points(road_segment_id, threshold)?)
    }

    /// mean congestion level for a segment, 0.0 when nothing is known about it.
    pub fn average_congestion(&self, road_segment_id: &str) -> Result<f64, TrafficError> {
        let observations = self
            .store
            .list_by_segment(road_segment_id)?
            .into_iter()
            .map(Observation::from)
            .collect_vec();
        log::debug!(
            "averaging congestion over {} observations for segment '{road_segment_id}'",
            observations.len()
        );
        Ok(traffic_core::average_congestion(&observations))
    }
}

use chrono::NaiveDateTime;
use itertools::Itertools;
use traffic_core::Observation;

use super::StoreError;
use crate::model::ObservationRecord;

/// persistence for traffic observations. implementors provide listing and saving;
/// the query methods filter the full listing unless a store can do better.
pub trait ObservationStore {
    /// every stored observation, in insertion order
    fn list_all(&self) -> Result<Vec<ObservationRecord>, StoreError>;

    /// stores an observation, assigning it a new id
    fn save(&mut self, observation: Observation) -> Result<ObservationRecord, StoreError>;

    fn save_all(
        &mut self,
        observations: Vec<Observation>,
    ) -> Result<Vec<ObservationRecord>, StoreError> {
        observations.into_iter().map(|o| self.save(o)).collect()
    }

    fn list_by_segment(&self, road_segment_id: &str) -> Result<Vec<ObservationRecord>, StoreError> {
        let rows = self
            .list_all()?
            .into_iter()
            .filter(|r| r.road_segment_id == road_segment_id)
            .collect_vec();
        Ok(rows)
    }

    /// observations taken between start and end, both inclusive
    fn list_by_time_range(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<ObservationRecord>, StoreError> {
        let rows = self
            .list_all()?
            .into_iter()
            .filter(|r| &r.timestamp >= start && &r.timestamp <= end)
            .collect_vec();
        Ok(rows)
    }

    /// observations on a segment with congestion strictly above the threshold.
    /// observations without a congestion level never match.
    fn congestion_points(
        &self,
        road_segment_id: &str,
        threshold: f64,
    ) -> Result<Vec<ObservationRecord>, StoreError> {
        let rows = self
            .list_by_segment(road_segment_id)?
            .into_iter()
            .filter(|r| matches!(r.congestion_level, Some(c) if c > threshold))
            .collect_vec();
        Ok(rows)
    }
}

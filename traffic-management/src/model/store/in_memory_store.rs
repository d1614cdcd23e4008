use traffic_core::Observation;

use super::{ObservationStore, StoreError};
use crate::model::ObservationRecord;

#[derive(Debug, Clone)]
pub struct InMemoryObservationStore {
    records: Vec<ObservationRecord>,
    next_id: u64,
}

impl Default for InMemoryObservationStore {
    fn default() -> Self {
        InMemoryObservationStore {
            records: vec![],
            next_id: 1,
        }
    }
}

impl InMemoryObservationStore {
    /// builds a store from previously persisted records. new ids continue after
    /// the largest id found.
    pub fn from_records(records: Vec<ObservationRecord>) -> InMemoryObservationStore {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        InMemoryObservationStore { records, next_id }
    }

    pub fn records(&self) -> &[ObservationRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ObservationStore for InMemoryObservationStore {
    fn list_all(&self) -> Result<Vec<ObservationRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, observation: Observation) -> Result<ObservationRecord, StoreError> {
        let record = ObservationRecord::new(self.next_id, observation);
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDateTime};
    use traffic_core::Observation;

    use super::InMemoryObservationStore;
    use crate::model::store::ObservationStore;

    fn base_time() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-03-01 12:00:00", "%Y-%m-%d %H:%M:%S")
            .expect("test invariant failed: could not parse timestamp")
    }

    fn mock_store() -> InMemoryObservationStore {
        let now = base_time();
        let mut store = InMemoryObservationStore::default();
        store
            .save_all(vec![
                Observation::new(now - Duration::hours(2), "A8-KM125-126", 85, Some(70.5), Some(0.65)),
                Observation::new(now - Duration::hours(1), "A8-KM125-126", 120, Some(45.2), Some(0.85)),
                Observation::new(now, "A8-KM125-126", 65, Some(95.0), None),
                Observation::new(now, "B27-KM45-46", 110, Some(30.5), Some(0.9)),
            ])
            .expect("test invariant failed: could not seed store");
        store
    }

    #[test]
    fn test_ids_assigned_in_order() {
        let store = mock_store();
        let ids: Vec<u64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ids_continue_after_loaded_records() {
        let store = mock_store();
        let mut reloaded = InMemoryObservationStore::from_records(store.records().to_vec());
        let record = reloaded
            .save(Observation::new(base_time(), "B27-KM45-46", 1, None, None))
            .expect("save should succeed");
        assert_eq!(record.id, 5);
    }

    #[test]
    fn test_ids_continue_after_gap() {
        let store = mock_store();
        let kept = store
            .records()
            .iter()
            .filter(|r| r.id != 2)
            .cloned()
            .collect::<Vec<_>>();
        let mut reloaded = InMemoryObservationStore::from_records(kept);
        let ids = reloaded
            .save_all(vec![
                Observation::new(base_time(), "B27-KM45-46", 1, None, None),
                Observation::new(base_time(), "B27-KM45-46", 2, None, None),
            ])
            .expect("save should succeed")
            .iter()
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn test_list_by_segment() {
        let store = mock_store();
        let rows = store
            .list_by_segment("A8-KM125-126")
            .expect("listing should succeed");
        assert_eq!(rows.len(), 3);
        assert!(store
            .list_by_segment("unknown")
            .expect("listing should succeed")
            .is_empty());
    }

    #[test]
    fn test_time_range_inclusive() {
        let store = mock_store();
        let start = base_time() - Duration::hours(1);
        let end = base_time();
        let rows = store
            .list_by_time_range(&start, &end)
            .expect("listing should succeed");
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_congestion_points_strictly_above() {
        let store = mock_store();
        let rows = store
            .congestion_points("A8-KM125-126", 0.65)
            .expect("listing should succeed");
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }
}

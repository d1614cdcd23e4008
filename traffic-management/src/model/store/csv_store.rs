use std::collections::HashSet;
use std::path::{Path, PathBuf};

use traffic_core::Observation;

use super::{InMemoryObservationStore, ObservationStore, StoreError};
use crate::model::{validation, ObservationRecord};

/// an observation store backed by a CSV file. the file is read once when the store
/// is opened and rewritten in full after every save. rows only become visible in
/// memory once the rewrite has replaced the file.
#[derive(Debug)]
pub struct CsvObservationStore {
    path: PathBuf,
    inner: InMemoryObservationStore,
}

impl CsvObservationStore {
    /// opens the store at `path`. a missing file is treated as an empty store and
    /// is only created on the first save. rows that fail validation or repeat an
    /// id are rejected.
    pub fn open(path: &Path) -> Result<CsvObservationStore, StoreError> {
        let inner = if path.exists() {
            let records = read_records(path)?;
            log::info!("loaded {} observations from {:?}", records.len(), path);
            InMemoryObservationStore::from_records(records)
        } else {
            log::info!("no observations file at {:?}, starting with an empty store", path);
            InMemoryObservationStore::default()
        };
        Ok(CsvObservationStore {
            path: path.to_path_buf(),
            inner,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// writes the candidate contents next to the target and renames them over it,
    /// then commits them as the in-memory state.
    fn commit(&mut self, candidate: InMemoryObservationStore) -> Result<(), StoreError> {
        let tmp_path = self.path.with_extension("csv.tmp");
        if let Err(e) = write_records(&tmp_path, candidate.records()) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e);
        }
        std::fs::rename(&tmp_path, &self.path)?;
        self.inner = candidate;
        Ok(())
    }
}

impl ObservationStore for CsvObservationStore {
    fn list_all(&self) -> Result<Vec<ObservationRecord>, StoreError> {
        self.inner.list_all()
    }

    fn save(&mut self, observation: Observation) -> Result<ObservationRecord, StoreError> {
        let mut candidate = self.inner.clone();
        let record = candidate.save(observation)?;
        self.commit(candidate)?;
        log::debug!("saved observation {} to {:?}", record.id, self.path);
        Ok(record)
    }

    fn save_all(
        &mut self,
        observations: Vec<Observation>,
    ) -> Result<Vec<ObservationRecord>, StoreError> {
        let mut candidate = self.inner.clone();
        let records = candidate.save_all(observations)?;
        self.commit(candidate)?;
        log::info!("saved {} observations to {:?}", records.len(), self.path);
        Ok(records)
    }
}

fn write_records(path: &Path, records: &[ObservationRecord]) -> Result<(), StoreError> {
    let path_str = path.to_string_lossy().to_string();
    let mut writer = csv::Writer::from_path(path).map_err(|source| StoreError::CsvWriteError {
        path: path_str.clone(),
        source,
    })?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|source| StoreError::CsvWriteError {
                path: path_str.clone(),
                source,
            })?;
    }
    writer.flush()?;
    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<ObservationRecord>, StoreError> {
    let path_str = path.to_string_lossy().to_string();
    let reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(|source| StoreError::CsvReadError {
            path: path_str.clone(),
            source,
        })?;
    let mut ids = HashSet::new();
    let mut records = vec![];
    for row in reader.into_deserialize::<ObservationRecord>() {
        let record = row.map_err(|source| StoreError::CsvReadError {
            path: path_str.clone(),
            source,
        })?;
        validation::validate_observation(&Observation::from(record.clone())).map_err(
            |source| StoreError::InvalidRecord {
                path: path_str.clone(),
                id: record.id,
                source,
            },
        )?;
        if !ids.insert(record.id) {
            return Err(StoreError::DuplicateId {
                path: path_str.clone(),
                id: record.id,
            });
        }
        records.push(record);
    }
    Ok(records)
}

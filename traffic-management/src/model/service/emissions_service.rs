use itertools::Itertools;
use rayon::prelude::*;
use traffic_core::{estimate_emissions, EmissionsEstimate, Observation};

use crate::model::{store::ObservationStore, TrafficError};

/// resolves road segments through a store and estimates their emissions.
pub struct EmissionsService<'a, S: ObservationStore> {
    store: &'a S,
}

impl<'a, S: ObservationStore> EmissionsService<'a, S> {
    pub fn new(store: &'a S) -> EmissionsService<'a, S> {
        EmissionsService { store }
    }

    /// estimate over every stored observation for the segment. an unknown segment
    /// yields the zeroed estimate.
    pub fn estimate_for_segment(
        &self,
        road_segment_id: &str,
    ) -> Result<EmissionsEstimate, TrafficError> {
        let observations = self
            .store
            .list_by_segment(road_segment_id)?
            .into_iter()
            .map(Observation::from)
            .collect_vec();
        log::debug!(
            "estimating emissions for segment '{road_segment_id}' from {} observations",
            observations.len()
        );
        Ok(estimate_emissions(road_segment_id, &observations))
    }

    /// one estimate per stored road segment, ordered by segment id. segments are
    /// estimated in parallel.
    pub fn estimate_all_segments(&self) -> Result<Vec<EmissionsEstimate>, TrafficError> {
        let observations = self
            .store
            .list_all()?
            .into_iter()
            .map(Observation::from)
            .collect_vec();
        let row_count = observations.len();
        let segments = observations
            .into_iter()
            .into_group_map_by(|o| o.road_segment_id.clone());
        log::debug!(
            "estimating emissions for {} segments from {row_count} observations",
            segments.len()
        );
        let mut estimates = segments
            .into_par_iter()
            .map(|(id, segment_observations)| estimate_emissions(&id, &segment_observations))
            .collect::<Vec<_>>();
        estimates.sort_by(|a, b| a.road_segment_id.cmp(&b.road_segment_id));
        Ok(estimates)
    }
}

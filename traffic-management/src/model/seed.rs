use chrono::{Duration, NaiveDateTime};
use traffic_core::Observation;

use super::store::{ObservationStore, StoreError};

/// sample readings for two road segments over the two hours leading up to `now`.
pub fn sample_observations(now: NaiveDateTime) -> Vec<Observation> {
    let two_hours_ago = now - Duration::hours(2);
    let one_hour_ago = now - Duration::hours(1);
    vec![
        Observation::new(two_hours_ago, "A8-KM125-126", 85, Some(70.5), Some(0.65)),
        Observation::new(one_hour_ago, "A8-KM125-126", 120, Some(45.2), Some(0.85)),
        Observation::new(now, "A8-KM125-126", 65, Some(95.0), Some(0.3)),
        Observation::new(two_hours_ago, "B27-KM45-46", 40, Some(85.3), Some(0.25)),
        Observation::new(one_hour_ago, "B27-KM45-46", 75, Some(60.8), Some(0.55)),
        Observation::new(now, "B27-KM45-46", 110, Some(30.5), Some(0.9)),
    ]
}

/// writes the sample observations when the store holds nothing yet.
///
/// # Returns
///
/// the number of observations written, 0 if the store already had data
pub fn seed_if_empty<S: ObservationStore>(
    store: &mut S,
    now: NaiveDateTime,
) -> Result<usize, StoreError> {
    if !store.list_all()?.is_empty() {
        log::debug!("store already holds observations, skipping seed");
        return Ok(0);
    }
    let records = store.save_all(sample_observations(now))?;
    log::info!("seeded store with {} sample observations", records.len());
    Ok(records.len())
}

mod csv_store;
mod in_memory_store;
mod observation_store;
mod store_error;

pub use csv_store::CsvObservationStore;
pub use in_memory_store::InMemoryObservationStore;
pub use observation_store::ObservationStore;
pub use store_error::StoreError;

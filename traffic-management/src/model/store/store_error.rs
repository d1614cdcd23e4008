use crate::model::validation::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failure reading observations from '{path}': {source}")]
    CsvReadError { path: String, source: csv::Error },
    #[error("failure writing observations to '{path}': {source}")]
    CsvWriteError { path: String, source: csv::Error },
    #[error("observation {id} in '{path}' is invalid: {source}")]
    InvalidRecord {
        path: String,
        id: u64,
        source: ValidationError,
    },
    #[error("observation id {id} appears more than once in '{path}'")]
    DuplicateId { path: String, id: u64 },
    #[error("failure writing observations: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}

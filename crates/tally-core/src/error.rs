//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The provided CSV data is empty.")]
    EmptyInput,

    #[error("{0}")]
    MissingColumns(String),

    #[error("Transaction ID {0} not found.")]
    NotFound(i64),

    #[error("No data available. Please upload a CSV file first.")]
    NoData,

    #[error("The {0} file was not found on the server.")]
    SampleFileMissing(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

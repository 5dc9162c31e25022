use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    /// Rejected input, surfaced before any generation output exists.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A pipeline contract was violated (e.g. a depot-free location set
    /// reaching vehicle generation). Fatal, never retried.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

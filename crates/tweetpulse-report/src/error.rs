use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The destination path could not be created or written.
    #[error("I/O error writing report: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

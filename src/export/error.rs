/// Errors that can occur while exporting fitted lines and records
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error on the output file or stream
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A record could not supply its observations
    #[error("Record error: {0}")]
    Record(#[from] crate::record::RecordError),
}

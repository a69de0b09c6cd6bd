use crate::record::RecordError;

/// Errors that can occur while building or querying the catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No record registered under this identifier
    #[error("Unknown record: {0}")]
    UnknownRecord(String),

    /// Two records registered under one identifier
    #[error("Duplicate record identifier: {0}")]
    DuplicateId(String),

    /// A record failed validation while the catalog was built
    #[error("Invalid record '{id}': {source}")]
    InvalidRecord {
        /// Identifier of the failing record
        id: String,
        /// Underlying record error
        #[source]
        source: RecordError,
    },

    /// Error building a record's data
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// The shared catalog could not be initialised
    #[error("Catalog initialisation failed: {0}")]
    Initialization(String),
}

use crate::arrhenius::FitError;
use crate::catalog::CatalogError;
use crate::record::RecordError;

/// Errors that can occur while pooling and fitting a mechanism
#[derive(Debug, thiserror::Error)]
pub enum MechanismError {
    /// A source record is missing from the catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A source record could not supply its observations
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// The pooled observations could not be fitted
    #[error("Fit error: {0}")]
    Fit(#[from] FitError),
}

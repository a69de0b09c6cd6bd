use super::Orientation;
use crate::arrhenius::FitError;

/// Errors that can occur while building or querying a measurement record
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Diffusivities given for an axis with no temperatures and no shared default
    #[error("No temperatures for {0} axis and no shared temperature list")]
    MissingTemperatures(Orientation),

    /// Temperatures given for an axis without diffusivities
    #[error("Temperatures given for {0} axis without diffusivities")]
    MissingDiffusivities(Orientation),

    /// Temperature and diffusivity lists of one axis differ in length
    #[error("{orientation} axis has {celsius} temperatures but {log_d} diffusivities")]
    MisalignedSeries {
        /// Axis with the mismatch
        orientation: Orientation,
        /// Number of resolved temperatures
        celsius: usize,
        /// Number of log10 diffusivities
        log_d: usize,
    },

    /// Uncertainty list of one axis does not match its diffusivities
    #[error("{orientation} axis has {errors} uncertainties but {log_d} diffusivities")]
    MisalignedErrors {
        /// Axis with the mismatch
        orientation: Orientation,
        /// Number of uncertainties
        errors: usize,
        /// Number of log10 diffusivities
        log_d: usize,
    },

    /// Record holds no measurements along the requested axis
    #[error("No measurements along {0} axis")]
    NoData(Orientation),

    /// Fitting the record's observations failed
    #[error("Fit error: {0}")]
    Fit(#[from] FitError),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

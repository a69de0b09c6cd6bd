/// Errors that can occur while fitting an Arrhenius line
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Temperature and diffusivity sequences differ in length
    #[error("Shape mismatch: {celsius} temperatures but {log_d} diffusivities")]
    ShapeMismatch {
        /// Number of temperatures supplied
        celsius: usize,
        /// Number of log10 diffusivities supplied
        log_d: usize,
    },

    /// Fewer than two paired observations, so a degree-1 fit is undefined
    #[error("Insufficient data: {count} observation(s), at least 2 required")]
    InsufficientData {
        /// Number of observations supplied
        count: usize,
    },

    /// All temperatures map to the same Arrhenius x-coordinate
    #[error("Numeric degeneracy: all {count} observations share one temperature")]
    NumericDegeneracy {
        /// Number of observations supplied
        count: usize,
    },

    /// Fitted coefficients or sampled values overflow the f64 range
    #[error("Numeric overflow: fit over {count} value(s) leaves the finite range")]
    Overflow {
        /// Number of observations fitted, or samples drawn
        count: usize,
    },

    /// Observation with a non-finite value or a temperature at or below absolute zero
    #[error("Invalid observation at index {index}: {celsius} °C, log D = {log_d}")]
    NonFiniteObservation {
        /// Position of the offending pair
        index: usize,
        /// Temperature in Celsius
        celsius: f64,
        /// log10 diffusivity
        log_d: f64,
    },

    /// Sampling domain bounds are not finite or not increasing
    #[error("Invalid domain: [{low}, {high}]")]
    InvalidDomain {
        /// Lower bound in 10⁴/T(K)
        low: f64,
        /// Upper bound in 10⁴/T(K)
        high: f64,
    },
}

use serde::Serialize;

use crate::units;

use super::fit::{fit_arrhenius, LineDomain, LinearFit};
use super::{FitError, FittedLine};

/// Paired Celsius temperatures and log10 diffusivities assembled for one fit.
///
/// The i-th temperature always belongs to the i-th diffusivity; every way of
/// building or growing a set keeps the two sequences the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObservationSet {
    celsius: Vec<f64>,
    log_d: Vec<f64>,
}

impl ObservationSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from parallel sequences, rejecting unequal lengths
    pub fn from_parallel(celsius: Vec<f64>, log_d: Vec<f64>) -> Result<Self, FitError> {
        if celsius.len() != log_d.len() {
            return Err(FitError::ShapeMismatch {
                celsius: celsius.len(),
                log_d: log_d.len(),
            });
        }
        Ok(Self { celsius, log_d })
    }

    /// Append one observation
    pub fn push(&mut self, celsius: f64, log_d: f64) {
        self.celsius.push(celsius);
        self.log_d.push(log_d);
    }

    /// Append parallel slices, rejecting unequal lengths without modifying the set
    pub fn extend_parallel(&mut self, celsius: &[f64], log_d: &[f64]) -> Result<(), FitError> {
        if celsius.len() != log_d.len() {
            return Err(FitError::ShapeMismatch {
                celsius: celsius.len(),
                log_d: log_d.len(),
            });
        }
        self.celsius.extend_from_slice(celsius);
        self.log_d.extend_from_slice(log_d);
        Ok(())
    }

    /// Append every observation of another set
    pub fn append(&mut self, other: &ObservationSet) {
        self.celsius.extend_from_slice(&other.celsius);
        self.log_d.extend_from_slice(&other.log_d);
    }

    /// Temperatures in Celsius
    pub fn celsius(&self) -> &[f64] {
        &self.celsius
    }

    /// log10 diffusivities
    pub fn log_d(&self) -> &[f64] {
        &self.log_d
    }

    /// Number of paired observations
    pub fn len(&self) -> usize {
        self.celsius.len()
    }

    /// True when the set holds no observations
    pub fn is_empty(&self) -> bool {
        self.celsius.is_empty()
    }

    /// Iterate over `(celsius, log_d)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.celsius.iter().copied().zip(self.log_d.iter().copied())
    }

    /// Temperatures transformed to 10⁴/T(K)
    pub fn arrhenius_x(&self) -> Vec<f64> {
        self.celsius.iter().map(|&c| units::to_arrhenius_x(c)).collect()
    }

    /// Least-squares Arrhenius fit through the set
    pub fn fit(&self) -> Result<LinearFit, FitError> {
        fit_arrhenius(&self.celsius, &self.log_d)
    }

    /// Fitted line sampled over `domain`
    pub fn fit_line(&self, domain: &LineDomain) -> Result<FittedLine, FitError> {
        let domain = domain.validated()?;
        self.fit()?.sample(&domain)
    }
}

impl Extend<(f64, f64)> for ObservationSet {
    fn extend<I: IntoIterator<Item = (f64, f64)>>(&mut self, iter: I) {
        for (celsius, log_d) in iter {
            self.push(celsius, log_d);
        }
    }
}

impl FromIterator<(f64, f64)> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
